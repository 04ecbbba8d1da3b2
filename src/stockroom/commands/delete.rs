use crate::commands::{CmdMessage, CmdResult};
use crate::model::ProductId;
use crate::store::Catalog;

pub fn run<C: Catalog>(catalog: &mut C, id: ProductId) -> CmdResult {
    match catalog.delete(id) {
        Some(removed) => CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "Product deleted (#{}): {}",
                id, removed.name
            )))
            .with_affected_products(vec![removed]),
        None => CmdResult::default().with_message(CmdMessage::warning(format!(
            "Product #{} not found; nothing was deleted",
            id
        ))),
    }
}
