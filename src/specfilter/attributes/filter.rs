//! Attribute filtering.
//!
//! `AttrSpec` is the generic "attribute equals" specification: it names an
//! attribute, an operation, and a value, and works for any item type that
//! implements [`Attributes`]. Typed specifications such as `ColorSpec` are
//! faster and checked at compile time; `AttrSpec` is what a parsed query
//! builds.

use super::{AttrValue, Attributes};
use crate::specification::Specification;

/// Filter operation for comparing attribute values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOp {
    /// Exact equality match.
    Eq,
    /// Not equal.
    Ne,
    /// List contains the specified value (for List attributes).
    Contains,
    /// List contains ALL specified values (for List attributes, AND logic).
    ContainsAll,
}

/// A condition on a single named attribute.
#[derive(Debug, Clone)]
pub struct AttrSpec {
    /// The attribute name (e.g., "color", "size", "tags")
    pub attr: String,
    /// The filter operation
    pub op: FilterOp,
    /// The value to compare against
    pub value: AttrValue,
}

impl AttrSpec {
    pub fn new(attr: impl Into<String>, op: FilterOp, value: AttrValue) -> Self {
        Self {
            attr: attr.into(),
            op,
            value,
        }
    }

    /// Convenience: create an equality condition.
    pub fn eq(attr: impl Into<String>, value: AttrValue) -> Self {
        Self::new(attr, FilterOp::Eq, value)
    }

    /// Convenience: create a not-equal condition.
    pub fn ne(attr: impl Into<String>, value: AttrValue) -> Self {
        Self::new(attr, FilterOp::Ne, value)
    }

    /// Convenience: create a contains condition for lists.
    pub fn contains(attr: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(attr, FilterOp::Contains, AttrValue::List(vec![value.into()]))
    }

    /// Convenience: create a contains-all condition for lists.
    pub fn contains_all(attr: impl Into<String>, values: Vec<String>) -> Self {
        Self::new(attr, FilterOp::ContainsAll, AttrValue::List(values))
    }

    /// Check the condition against a raw attribute value.
    ///
    /// A missing attribute never matches, not even for `Ne`.
    pub fn matches_value(&self, attr_value: Option<&AttrValue>) -> bool {
        let Some(attr_value) = attr_value else {
            return false;
        };

        match &self.op {
            FilterOp::Eq => values_equal(attr_value, &self.value),
            FilterOp::Ne => !values_equal(attr_value, &self.value),
            FilterOp::Contains => list_contains_any(attr_value, &self.value),
            FilterOp::ContainsAll => list_contains_all(attr_value, &self.value),
        }
    }
}

impl<T: Attributes> Specification<T> for AttrSpec {
    fn is_satisfied(&self, item: &T) -> bool {
        self.matches_value(item.attr(&self.attr).as_ref())
    }
}

fn values_equal(a: &AttrValue, b: &AttrValue) -> bool {
    match (a, b) {
        (AttrValue::Bool(a_val), AttrValue::Bool(b_val)) => a_val == b_val,
        (AttrValue::Text(a_val), AttrValue::Text(b_val)) => a_val == b_val,
        (AttrValue::Enum(a_val), AttrValue::Enum(b_val)) => a_val.eq_ignore_ascii_case(b_val),
        (AttrValue::List(a_list), AttrValue::List(b_list)) => a_list == b_list,
        _ => false, // Different types are not equal
    }
}

fn list_contains_any(attr_value: &AttrValue, filter_value: &AttrValue) -> bool {
    let (Some(attr_list), Some(filter_list)) = (attr_value.as_list(), filter_value.as_list())
    else {
        return false;
    };
    filter_list.iter().any(|v| attr_list.contains(v))
}

fn list_contains_all(attr_value: &AttrValue, filter_value: &AttrValue) -> bool {
    let (Some(attr_list), Some(filter_list)) = (attr_value.as_list(), filter_value.as_list())
    else {
        return false;
    };
    filter_list.iter().all(|v| attr_list.contains(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Product, Size};

    fn product_with_tags(tags: Vec<&str>) -> Product {
        Product::new("Test", Color::Red, Size::Small).with_tags(tags)
    }

    #[test]
    fn eq_enum_matches_case_insensitively() {
        let spec = AttrSpec::eq("color", AttrValue::Enum("Green".into()));

        assert!(spec.is_satisfied(&Product::new("A", Color::Green, Size::Small)));
        assert!(!spec.is_satisfied(&Product::new("B", Color::Blue, Size::Small)));
    }

    #[test]
    fn ne_enum() {
        let spec = AttrSpec::ne("size", AttrValue::Enum("large".into()));

        assert!(spec.is_satisfied(&Product::new("A", Color::Green, Size::Small)));
        assert!(!spec.is_satisfied(&Product::new("B", Color::Green, Size::Large)));
    }

    #[test]
    fn eq_text_is_exact() {
        let spec = AttrSpec::eq("name", AttrValue::Text("Apple".into()));

        assert!(spec.is_satisfied(&Product::new("Apple", Color::Green, Size::Small)));
        assert!(!spec.is_satisfied(&Product::new("apple", Color::Green, Size::Small)));
    }

    #[test]
    fn eq_bool() {
        let spec = AttrSpec::eq("in_stock", AttrValue::Bool(false));

        let mut sold_out = Product::new("A", Color::Green, Size::Small);
        sold_out.in_stock = false;

        assert!(spec.is_satisfied(&sold_out));
        assert!(!spec.is_satisfied(&Product::new("B", Color::Green, Size::Small)));
    }

    #[test]
    fn contains_single_tag() {
        let spec = AttrSpec::contains("tags", "fruit");

        assert!(spec.is_satisfied(&product_with_tags(vec!["fruit"])));
        assert!(spec.is_satisfied(&product_with_tags(vec!["fruit", "fresh"])));
        assert!(!spec.is_satisfied(&product_with_tags(vec!["building"])));
        assert!(!spec.is_satisfied(&product_with_tags(vec![])));
    }

    #[test]
    fn contains_all_tags() {
        let spec = AttrSpec::contains_all("tags", vec!["fruit".into(), "fresh".into()]);

        assert!(spec.is_satisfied(&product_with_tags(vec!["fruit", "fresh"])));
        assert!(spec.is_satisfied(&product_with_tags(vec!["fresh", "fruit", "ripe"])));
        assert!(!spec.is_satisfied(&product_with_tags(vec!["fruit"])));
        assert!(!spec.is_satisfied(&product_with_tags(vec![])));
    }

    #[test]
    fn unknown_attr_never_matches() {
        let product = Product::new("A", Color::Green, Size::Small);
        assert!(!AttrSpec::eq("weight", AttrValue::Text("1kg".into())).is_satisfied(&product));
        assert!(!AttrSpec::ne("weight", AttrValue::Text("1kg".into())).is_satisfied(&product));
    }

    #[test]
    fn type_mismatch_never_equal() {
        // color is an Enum, not a Bool
        let spec = AttrSpec::eq("color", AttrValue::Bool(true));
        assert!(!spec.is_satisfied(&Product::new("A", Color::Green, Size::Small)));
    }

    #[test]
    fn contains_on_non_list_is_false() {
        let spec = AttrSpec::contains("color", "green");
        assert!(!spec.is_satisfied(&Product::new("A", Color::Green, Size::Small)));
    }
}
