//! The classic walkthrough: filter by color, by size, then by both.
//!
//! Unlike `filter`, these scenarios are built from typed specifications and
//! the `Spec` operators rather than a query string.

use crate::commands::{index_items, CmdResult, ListedGroup, ListedItem};
use crate::error::Result;
use crate::filter::{Filter, ItemFilter};
use crate::model::{Color, ColorSpec, Product, Size, SizeSpec};
use crate::operators::Spec;
use crate::specification::{project, BoxedSpec, Specification};
use crate::store::CatalogStore;
use tracing::debug;

fn scenarios() -> Vec<(&'static str, BoxedSpec<Product>)> {
    vec![
        ("green", ColorSpec(Color::Green).boxed()),
        ("large", SizeSpec(Size::Large).boxed()),
        (
            "green and large",
            ColorSpec(Color::Green).and(SizeSpec(Size::Large)).boxed(),
        ),
        (
            "blue or small",
            (Spec(ColorSpec(Color::Blue)) | Spec(SizeSpec(Size::Small))).boxed(),
        ),
        ("not green", (!Spec(ColorSpec(Color::Green))).boxed()),
    ]
}

pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let indexed = index_items(store.list_items()?);

    let groups = scenarios()
        .into_iter()
        .map(|(label, spec)| {
            let spec = project(spec, |listed: &ListedItem| &listed.item);
            let items: Vec<ListedItem> = ItemFilter
                .filter(&indexed, &spec)
                .into_iter()
                .cloned()
                .collect();
            debug!(scenario = label, matched = items.len(), "demo scenario");
            ListedGroup {
                label: label.to_string(),
                items,
            }
        })
        .collect();

    Ok(CmdResult::default().with_groups(groups))
}
