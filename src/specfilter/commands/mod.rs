use crate::attributes::AttributeDef;
use crate::config::SpecFilterConfig;
use crate::model::Product;
use serde::Serialize;
use std::path::PathBuf;

pub mod attrs;
pub mod config;
pub mod demo;
pub mod filter;
pub mod init;
pub mod list;

#[derive(Debug, Clone)]
pub struct SpecFilterPaths {
    /// Holds `config.json` and the catalog written by `init`.
    pub data_dir: PathBuf,
}

impl SpecFilterPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn default_catalog(&self) -> PathBuf {
        self.data_dir.join("catalog.json")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An item together with its 1-based position in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedItem {
    pub index: usize,
    pub item: Product,
}

/// A labelled set of listed items (one per demo scenario).
#[derive(Debug, Clone, Serialize)]
pub struct ListedGroup {
    pub label: String,
    pub items: Vec<ListedItem>,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed: Vec<ListedItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<ListedGroup>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<SpecFilterConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<ListedItem>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_groups(mut self, groups: Vec<ListedGroup>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<AttributeDef>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_config(mut self, config: SpecFilterConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Pair each item with its 1-based catalog position.
pub(crate) fn index_items(items: Vec<Product>) -> Vec<ListedItem> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| ListedItem { index: i + 1, item })
        .collect()
}
