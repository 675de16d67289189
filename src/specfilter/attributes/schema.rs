//! Attribute schema definitions.
//!
//! Each item type publishes a static table of [`AttributeDef`]s. The query
//! parser uses it to reject unknown attributes and invalid enum values before
//! a specification is ever built.

use serde::Serialize;

/// The kind of value an attribute holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    /// Simple boolean (e.g., `in_stock`)
    Bool,

    /// Free-form string (e.g., `name`)
    Text,

    /// Closed set of values (e.g., `color`, `size`)
    Enum,

    /// List of strings (e.g., `tags`)
    List,
}

impl AttributeKind {
    pub fn label(&self) -> &'static str {
        match self {
            AttributeKind::Bool => "bool",
            AttributeKind::Text => "text",
            AttributeKind::Enum => "enum",
            AttributeKind::List => "list",
        }
    }
}

/// Definition of a single attribute.
#[derive(Debug, Clone, Serialize)]
pub struct AttributeDef {
    /// The attribute name used in queries (e.g., "color", "tags")
    pub name: &'static str,

    /// The kind of value this attribute holds
    pub kind: AttributeKind,

    /// Whether this attribute can be used in query conditions
    pub filterable: bool,

    /// Valid values for `Enum` attributes, lowercase. Empty for other kinds.
    pub values: &'static [&'static str],
}

impl AttributeDef {
    /// Create a new attribute definition (not filterable, no value set).
    pub const fn new(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            filterable: false,
            values: &[],
        }
    }

    /// Set the filterable flag.
    pub const fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Restrict the attribute to a fixed value set.
    pub const fn with_values(mut self, values: &'static [&'static str]) -> Self {
        self.values = values;
        self
    }

    /// Whether `value` is acceptable for this attribute (case-insensitive for enums).
    pub fn accepts(&self, value: &str) -> bool {
        match self.kind {
            AttributeKind::Enum => self.values.iter().any(|v| v.eq_ignore_ascii_case(value)),
            AttributeKind::Bool => matches!(value, "true" | "false"),
            AttributeKind::Text | AttributeKind::List => true,
        }
    }
}

/// Look up an attribute definition by name.
pub fn lookup<'a>(schema: &'a [AttributeDef], name: &str) -> Option<&'a AttributeDef> {
    schema.iter().find(|def| def.name == name)
}

/// All filterable attributes of a schema.
pub fn filterable(schema: &[AttributeDef]) -> impl Iterator<Item = &AttributeDef> {
    schema.iter().filter(|def| def.filterable)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &[AttributeDef] = &[
        AttributeDef::new("name", AttributeKind::Text).filterable(),
        AttributeDef::new("shade", AttributeKind::Enum)
            .filterable()
            .with_values(&["light", "dark"]),
        AttributeDef::new("internal", AttributeKind::Bool),
    ];

    #[test]
    fn lookup_finds_known_attributes() {
        assert!(lookup(SCHEMA, "name").is_some());
        assert!(lookup(SCHEMA, "shade").is_some());
        assert!(lookup(SCHEMA, "internal").is_some());
    }

    #[test]
    fn unknown_attribute_returns_none() {
        assert!(lookup(SCHEMA, "nonexistent").is_none());
    }

    #[test]
    fn filterable_skips_internal() {
        let names: Vec<_> = filterable(SCHEMA).map(|def| def.name).collect();
        assert_eq!(names, vec!["name", "shade"]);
    }

    #[test]
    fn enum_accepts_only_listed_values() {
        let shade = lookup(SCHEMA, "shade").unwrap();
        assert!(shade.accepts("light"));
        assert!(shade.accepts("DARK"));
        assert!(!shade.accepts("medium"));
    }

    #[test]
    fn bool_accepts_true_and_false() {
        let internal = lookup(SCHEMA, "internal").unwrap();
        assert!(internal.accepts("true"));
        assert!(internal.accepts("false"));
        assert!(!internal.accepts("yes"));
    }

    #[test]
    fn text_accepts_anything() {
        let name = lookup(SCHEMA, "name").unwrap();
        assert!(name.accepts("Anything at all"));
    }
}
