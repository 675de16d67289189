//! # Attribute System
//!
//! Items are opaque to the filter. To be matched by name (from a query string
//! or a generic [`AttrSpec`]) an item type implements [`Attributes`], which
//! exposes:
//!
//! - **Values**: `attr(name)` returns the current value of a named attribute
//! - **Schema**: `schema()` lists the attributes the type knows about, their
//!   kind, and (for enums) the set of valid values
//!
//! ## Attribute Kinds
//!
//! | Kind | Examples | Description |
//! |------|----------|-------------|
//! | `Text` | `name` | Free-form string |
//! | `Enum` | `color`, `size` | Closed set of values |
//! | `List` | `tags` | Open set of strings |
//! | `Bool` | `in_stock` | Simple true/false |
//!
//! ## Usage
//!
//! ```ignore
//! let value = product.attr("color");
//!
//! let spec = AttrSpec::eq("size", AttrValue::Enum("large".into()));
//! let large: Vec<&Product> = filter(&products, &spec);
//! ```

mod filter;
mod schema;
mod value;

pub use filter::{AttrSpec, FilterOp};
pub use schema::{filterable, lookup, AttributeDef, AttributeKind};
pub use value::AttrValue;

/// Named-attribute access for filterable items.
pub trait Attributes {
    /// The registry of attributes this item type exposes.
    fn schema() -> &'static [AttributeDef]
    where
        Self: Sized;

    /// The value of the named attribute, or `None` if the item has no such attribute.
    fn attr(&self, name: &str) -> Option<AttrValue>;
}
