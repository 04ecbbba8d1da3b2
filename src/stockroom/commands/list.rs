use crate::commands::CmdResult;
use crate::store::Catalog;

pub fn run<C: Catalog>(catalog: &C) -> CmdResult {
    CmdResult::default()
        .with_listed_products(catalog.list().to_vec())
        .with_total(catalog.total())
}
