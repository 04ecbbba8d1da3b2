use crate::commands::{CmdMessage, CmdResult};
use crate::model::Draft;
use crate::store::Catalog;

pub fn run<C: Catalog>(catalog: &mut C, draft: Draft) -> CmdResult {
    let product = catalog.create(draft);
    CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Product created (#{}): {}",
            product.id, product.name
        )))
        .with_affected_products(vec![product])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryCatalog;

    #[test]
    fn creates_product() {
        let mut catalog = MemoryCatalog::new();
        let result = run(&mut catalog, Draft::new("bút", 10000));

        assert_eq!(catalog.len(), 1);
        assert_eq!(result.affected_products.len(), 1);
        assert_eq!(result.affected_products[0].name, "bút");
        assert_eq!(catalog.total(), 10000);
    }

    #[test]
    fn reports_new_id() {
        let mut catalog = MemoryCatalog::new();
        run(&mut catalog, Draft::new("a", 1));
        let result = run(&mut catalog, Draft::new("b", 2));

        assert_eq!(result.messages[0].content, "Product created (#2): b");
    }

    #[test]
    fn identical_drafts_get_distinct_ids() {
        let mut catalog = MemoryCatalog::new();
        let a = run(&mut catalog, Draft::new("same", 5));
        let b = run(&mut catalog, Draft::new("same", 5));
        assert_ne!(a.affected_products[0].id, b.affected_products[0].id);
        assert_eq!(catalog.total(), 10);
    }
}
