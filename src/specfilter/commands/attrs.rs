use crate::attributes::{filterable, Attributes};
use crate::commands::CmdResult;
use crate::model::Product;

pub fn run() -> CmdResult {
    let attributes = filterable(Product::schema()).cloned().collect();
    CmdResult::default().with_attributes(attributes)
}
