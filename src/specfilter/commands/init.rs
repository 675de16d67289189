use crate::commands::{CmdMessage, CmdResult, SpecFilterPaths};
use crate::config::SpecFilterConfig;
use crate::error::Result;
use crate::store::fs::FileCatalog;
use crate::store::memory::DEMO_PRODUCTS;
use crate::store::CatalogStore;
use std::fs;
use tracing::info;

/// Create the data directory, seed `catalog.json` with the demo products, and
/// point the config at it. An existing catalog file is left untouched.
pub fn run(paths: &SpecFilterPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;
    let mut result = CmdResult::default();

    let catalog_path = paths.default_catalog();
    if catalog_path.exists() {
        result.add_message(CmdMessage::warning(format!(
            "Catalog already exists at {}",
            catalog_path.display()
        )));
    } else {
        let mut store = FileCatalog::new(&catalog_path);
        store.save_items(&DEMO_PRODUCTS)?;
        info!(path = %catalog_path.display(), items = DEMO_PRODUCTS.len(), "seeded catalog");
        result.add_message(CmdMessage::success(format!(
            "Wrote demo catalog to {}",
            catalog_path.display()
        )));
    }

    let mut config = SpecFilterConfig::load(&paths.data_dir)?;
    if config.catalog.is_none() {
        config.catalog = Some(catalog_path);
        config.save(&paths.data_dir)?;
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn seeds_catalog_and_config() {
        let dir = tempfile::tempdir().unwrap();
        let paths = SpecFilterPaths::new(dir.path().join("data"));

        let result = run(&paths).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let items = FileCatalog::new(paths.default_catalog()).list_items().unwrap();
        assert_eq!(items.len(), 3);

        let config = SpecFilterConfig::load(&paths.data_dir).unwrap();
        assert_eq!(config.catalog, Some(paths.default_catalog()));
    }

    #[test]
    fn second_run_keeps_existing_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let paths = SpecFilterPaths::new(dir.path());
        run(&paths).unwrap();

        let mut store = FileCatalog::new(paths.default_catalog());
        store.save_items(&[]).unwrap();

        let result = run(&paths).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(store.list_items().unwrap().is_empty());
    }
}
