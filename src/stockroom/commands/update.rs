use crate::commands::{CmdMessage, CmdResult};
use crate::model::Product;
use crate::store::Catalog;

pub fn run<C: Catalog>(catalog: &mut C, product: Product) -> CmdResult {
    let id = product.id;
    match catalog.update(product.clone()) {
        Some(_) => CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "Product updated (#{}): {}",
                id, product.name
            )))
            .with_affected_products(vec![product]),
        None => CmdResult::default().with_message(CmdMessage::warning(format!(
            "Product #{} no longer exists; nothing was updated",
            id
        ))),
    }
}
