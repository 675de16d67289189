//! # Catalog Storage
//!
//! Commands never read files directly. They go through the [`CatalogStore`]
//! trait so the same logic runs against a JSON file on disk or a catalog held
//! in memory.
//!
//! ## Implementations
//!
//! - [`fs::FileCatalog`]: a JSON array of products in a single file
//! - [`memory::InMemoryCatalog`]: no persistence, used for the built-in demo
//!   catalog and for tests
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "name": "Apple", "color": "green", "size": "small", "tags": ["fruit"] },
//!   { "name": "House", "color": "green", "size": "large", "in_stock": false }
//! ]
//! ```
//!
//! `tags` defaults to empty and `in_stock` to `true`. Item order in the file
//! is the catalog order, and filtering preserves it.

use crate::error::Result;
use crate::model::Product;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog storage.
pub trait CatalogStore {
    /// All items, in catalog order.
    fn list_items(&self) -> Result<Vec<Product>>;

    /// Replace the stored items.
    fn save_items(&mut self, items: &[Product]) -> Result<()>;

    /// Human-readable description of where the items come from.
    fn describe(&self) -> String;
}

impl<S: CatalogStore + ?Sized> CatalogStore for Box<S> {
    fn list_items(&self) -> Result<Vec<Product>> {
        (**self).list_items()
    }

    fn save_items(&mut self, items: &[Product]) -> Result<()> {
        (**self).save_items(items)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
