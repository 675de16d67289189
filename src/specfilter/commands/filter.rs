use crate::commands::{index_items, CmdMessage, CmdResult, ListedItem};
use crate::error::Result;
use crate::filter::filter_owned;
use crate::model::Product;
use crate::query;
use crate::specification::project;
use crate::store::CatalogStore;
use tracing::debug;

pub fn run<S: CatalogStore>(store: &S, query_text: &str) -> Result<CmdResult> {
    let parsed = query::parse(query_text)?;
    let spec = parsed.compile::<Product>()?;
    debug!(query = %parsed, "compiled query");

    let items = store.list_items()?;
    let total = items.len();
    let matches = filter_owned(
        index_items(items),
        &project(spec, |listed: &ListedItem| &listed.item),
    );
    debug!(matched = matches.len(), total, source = %store.describe(), "filter applied");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} of {} items match {}",
        matches.len(),
        total,
        parsed
    )));
    Ok(result.with_listed(matches))
}
