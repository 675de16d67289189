use super::CatalogStore;
use crate::error::Result;
use crate::model::Product;
use std::fs;
use std::path::{Path, PathBuf};

/// A catalog stored as a JSON array in a single file.
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for FileCatalog {
    fn list_items(&self) -> Result<Vec<Product>> {
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let items: Vec<Product> = serde_json::from_str(&content)?;
        Ok(items)
    }

    fn save_items(&mut self, items: &[Product]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpecFilterError;
    use crate::model::{Color, Size};

    #[test]
    fn save_then_list_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileCatalog::new(dir.path().join("sub").join("catalog.json"));
        let items = vec![
            Product::new("Zebra", Color::Blue, Size::Large),
            Product::new("Ant", Color::Red, Size::Small).with_tags(["bug"]),
        ];

        store.save_items(&items).unwrap();
        assert_eq!(store.list_items().unwrap(), items);
    }

    #[test]
    fn empty_file_is_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "  \n").unwrap();

        assert!(FileCatalog::new(&path).list_items().unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCatalog::new(dir.path().join("nope.json"));
        assert!(matches!(store.list_items(), Err(SpecFilterError::Io(_))));
    }

    #[test]
    fn malformed_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, r#"[{"name": "X", "color": "purple", "size": "small"}]"#).unwrap();

        let store = FileCatalog::new(&path);
        assert!(matches!(
            store.list_items(),
            Err(SpecFilterError::Serialization(_))
        ));
    }
}
