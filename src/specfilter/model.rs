use crate::attributes::{AttrValue, AttributeDef, AttributeKind, Attributes};
use crate::error::SpecFilterError;
use crate::specification::Specification;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = SpecFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SpecFilterError::InvalidValue {
                attr: "color".to_string(),
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = SpecFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|sz| sz.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SpecFilterError::InvalidValue {
                attr: "size".to_string(),
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
            tags: Vec::new(),
            in_stock: true,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Attribute registry for [`Product`].
pub const PRODUCT_ATTRIBUTES: &[AttributeDef] = &[
    AttributeDef::new("name", AttributeKind::Text).filterable(),
    AttributeDef::new("color", AttributeKind::Enum)
        .filterable()
        .with_values(&["red", "green", "blue"]),
    AttributeDef::new("size", AttributeKind::Enum)
        .filterable()
        .with_values(&["small", "medium", "large"]),
    AttributeDef::new("tags", AttributeKind::List).filterable(),
    AttributeDef::new("in_stock", AttributeKind::Bool).filterable(),
];

impl Attributes for Product {
    fn schema() -> &'static [AttributeDef] {
        PRODUCT_ATTRIBUTES
    }

    fn attr(&self, name: &str) -> Option<AttrValue> {
        match name {
            "name" => Some(AttrValue::Text(self.name.clone())),
            "color" => Some(AttrValue::Enum(self.color.as_str().to_string())),
            "size" => Some(AttrValue::Enum(self.size.as_str().to_string())),
            "tags" => Some(AttrValue::List(self.tags.clone())),
            "in_stock" => Some(AttrValue::Bool(self.in_stock)),
            _ => None,
        }
    }
}

/// Matches products of one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpec(pub Color);

impl Specification<Product> for ColorSpec {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.0
    }
}

/// Matches products of one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec(pub Size);

impl Specification<Product> for SizeSpec {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::lookup;

    #[test]
    fn color_parses_case_insensitively() {
        assert_eq!("GREEN".parse::<Color>().unwrap(), Color::Green);
        assert_eq!("blue".parse::<Color>().unwrap(), Color::Blue);
        assert!("purple".parse::<Color>().is_err());
    }

    #[test]
    fn size_round_trips_through_display() {
        for size in Size::ALL {
            assert_eq!(size.to_string().parse::<Size>().unwrap(), size);
        }
    }

    #[test]
    fn schema_enum_values_match_variants() {
        let color = lookup(Product::schema(), "color").unwrap();
        for c in Color::ALL {
            assert!(color.accepts(c.as_str()));
        }
        let size = lookup(Product::schema(), "size").unwrap();
        for s in Size::ALL {
            assert!(size.accepts(s.as_str()));
        }
    }

    #[test]
    fn every_schema_attribute_is_readable() {
        let product = Product::new("Apple", Color::Green, Size::Small).with_tags(["fruit"]);
        for def in Product::schema() {
            assert!(product.attr(def.name).is_some(), "{} missing", def.name);
        }
        assert!(product.attr("weight").is_none());
    }

    #[test]
    fn deserializes_with_defaults() {
        let json = r#"{"name": "House", "color": "green", "size": "large"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product, Product::new("House", Color::Green, Size::Large));
        assert!(product.in_stock);
        assert!(product.tags.is_empty());
    }

    #[test]
    fn typed_specs_match_fields() {
        let apple = Product::new("Apple", Color::Green, Size::Small);
        assert!(ColorSpec(Color::Green).is_satisfied(&apple));
        assert!(!ColorSpec(Color::Red).is_satisfied(&apple));
        assert!(SizeSpec(Size::Small).is_satisfied(&apple));
        assert!(!SizeSpec(Size::Large).is_satisfied(&apple));
    }
}
