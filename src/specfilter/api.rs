//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! specfilter operation, whatever the UI.
//!
//! The facade dispatches to `commands/*.rs` and returns `Result<CmdResult>`.
//! It does no I/O of its own and never formats output.
//!
//! `SpecFilterApi<S: CatalogStore>` is generic over the catalog backend:
//! the CLI uses a file or the built-in catalog, tests use `InMemoryCatalog`.

use crate::commands;
use crate::error::Result;
use crate::store::CatalogStore;

pub struct SpecFilterApi<S: CatalogStore> {
    store: S,
    paths: commands::SpecFilterPaths,
}

impl<S: CatalogStore> SpecFilterApi<S> {
    pub fn new(store: S, paths: commands::SpecFilterPaths) -> Self {
        Self { store, paths }
    }

    pub fn list_items(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    /// Filter the catalog with a query such as `color=green & !size=large`.
    pub fn filter_items(&self, query: &str) -> Result<commands::CmdResult> {
        commands::filter::run(&self.store, query)
    }

    pub fn attributes(&self) -> commands::CmdResult {
        commands::attrs::run()
    }

    pub fn demo(&self) -> Result<commands::CmdResult> {
        commands::demo::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn source(&self) -> String {
        self.store.describe()
    }

    pub fn paths(&self) -> &commands::SpecFilterPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ListedGroup, ListedItem, MessageLevel, SpecFilterPaths};
