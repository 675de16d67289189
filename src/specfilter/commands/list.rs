use crate::commands::{index_items, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let items = store.list_items()?;
    Ok(CmdResult::default().with_listed(index_items(items)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryCatalog;

    #[test]
    fn lists_every_item_with_positions() {
        let store = InMemoryCatalog::demo();
        let result = run(&store).unwrap();

        let indexes: Vec<_> = result.listed.iter().map(|l| l.index).collect();
        assert_eq!(indexes, vec![1, 2, 3]);
        assert_eq!(result.listed[2].item.name, "House");
    }

    #[test]
    fn empty_catalog_lists_nothing() {
        let store = InMemoryCatalog::default();
        assert!(run(&store).unwrap().listed.is_empty());
    }
}
