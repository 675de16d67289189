use super::CatalogStore;
use crate::error::Result;
use crate::model::{Color, Product, Size};
use once_cell::sync::Lazy;

/// The three products every example starts from.
pub static DEMO_PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product::new("Apple", Color::Green, Size::Small).with_tags(["fruit"]),
        Product::new("Banana", Color::Blue, Size::Medium).with_tags(["fruit"]),
        Product::new("House", Color::Green, Size::Large).with_tags(["building"]),
    ]
});

/// In-memory catalog. Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    items: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(items: Vec<Product>) -> Self {
        Self { items }
    }

    /// The built-in demo catalog.
    pub fn demo() -> Self {
        Self::new(DEMO_PRODUCTS.clone())
    }
}

impl CatalogStore for InMemoryCatalog {
    fn list_items(&self) -> Result<Vec<Product>> {
        Ok(self.items.clone())
    }

    fn save_items(&mut self, items: &[Product]) -> Result<()> {
        self.items = items.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}
