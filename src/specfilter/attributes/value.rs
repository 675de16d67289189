//! Attribute value types.
//!
//! This module defines the runtime representation of attribute values,
//! as returned by [`Attributes::attr`](super::Attributes::attr) and compared
//! by [`AttrSpec`](super::AttrSpec).

use std::fmt;

/// Runtime representation of an attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Simple boolean value (e.g., `in_stock`)
    Bool(bool),

    /// Free-form text (e.g., `name`)
    Text(String),

    /// Enum value as its canonical lowercase name (e.g., `color` = "green")
    Enum(String),

    /// List of strings (e.g., `tags`)
    List(Vec<String>),
}

impl AttrValue {
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttrValue::List(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(v) => write!(f, "{}", v),
            AttrValue::Text(s) | AttrValue::Enum(s) => write!(f, "{}", s),
            AttrValue::List(v) => write!(f, "{}", v.join(",")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_list_only_for_lists() {
        let list = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            AttrValue::List(list.clone()).as_list(),
            Some(list.as_slice())
        );
        assert_eq!(AttrValue::Bool(true).as_list(), None);
        assert_eq!(AttrValue::Enum("fruit".into()).as_list(), None);
    }

    #[test]
    fn display_joins_lists() {
        let list = AttrValue::List(vec!["fruit".into(), "fresh".into()]);
        assert_eq!(list.to_string(), "fruit,fresh");
        assert_eq!(AttrValue::Enum("large".into()).to_string(), "large");
    }
}
