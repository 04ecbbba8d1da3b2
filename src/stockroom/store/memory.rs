use super::feed::{ChangeFeed, SubscriptionId};
use super::{Catalog, CatalogChange, CatalogEvent};
use crate::model::{Draft, Product, ProductId};
use tracing::debug;

/// In-memory catalog. Records keep insertion order; nothing outlives the value.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    products: Vec<Product>,
    last_id: u64,
    feed: ChangeFeed,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog by creating each draft in order, so the first gets id 1.
    pub fn seeded<I>(drafts: I) -> Self
    where
        I: IntoIterator<Item = Draft>,
    {
        let mut catalog = Self::new();
        for draft in drafts {
            catalog.create(draft);
        }
        catalog
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.feed.len()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    fn mint_id(&mut self) -> ProductId {
        self.last_id += 1;
        ProductId::new(self.last_id)
    }

    fn notify(&mut self, change: CatalogChange) {
        let event = CatalogEvent {
            change: &change,
            products: &self.products,
        };
        self.feed.emit(&event);
    }
}

impl Catalog for MemoryCatalog {
    fn create(&mut self, draft: Draft) -> Product {
        let id = self.mint_id();
        let product = draft.into_product(id);
        self.products.push(product.clone());
        debug!(%id, name = %product.name, price = product.price, "product created");
        self.notify(CatalogChange::Created(product.clone()));
        product
    }

    fn update(&mut self, product: Product) -> Option<Product> {
        let Some(index) = self.position(product.id) else {
            debug!(id = %product.id, "update skipped, no such product");
            return None;
        };
        let before = std::mem::replace(&mut self.products[index], product.clone());
        debug!(id = %product.id, from = before.price, to = product.price, "product updated");
        self.notify(CatalogChange::Updated {
            before: before.clone(),
            after: product,
        });
        Some(before)
    }

    fn delete(&mut self, id: ProductId) -> Option<Product> {
        let Some(index) = self.position(id) else {
            debug!(%id, "delete skipped, no such product");
            return None;
        };
        let removed = self.products.remove(index);
        debug!(%id, "product deleted");
        self.notify(CatalogChange::Deleted(removed.clone()));
        Some(removed)
    }

    fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn list(&self) -> &[Product] {
        &self.products
    }

    fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CatalogEvent<'_>) + 'static,
    {
        self.feed.subscribe(listener)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.feed.unsubscribe(id)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct CatalogFixture {
        pub catalog: MemoryCatalog,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                catalog: MemoryCatalog::new(),
            }
        }

        /// The catalog a fresh session starts with.
        pub fn with_default_seed(self) -> Self {
            self.with_product("bút", 10000)
        }

        pub fn with_product(mut self, name: &str, price: u64) -> Self {
            self.catalog.create(Draft::new(name, price));
            self
        }

        pub fn with_products(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Product {}", i + 1);
                self.catalog.create(Draft::new(name, (i as u64 + 1) * 1000));
            }
            self
        }

        pub fn build(self) -> MemoryCatalog {
            self.catalog
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::CatalogFixture;
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn create_on_empty_catalog() {
        let mut catalog = MemoryCatalog::new();
        let product = catalog.create(Draft::new("bút", 10000));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.list()[0], product);
        assert_eq!(product.name, "bút");
        assert_eq!(product.price, 10000);
        assert_eq!(catalog.total(), 10000);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut catalog = CatalogFixture::new()
            .with_default_seed()
            .with_product("thước", 5000)
            .build();
        let first = catalog.list()[0].clone();

        let previous = catalog.update(first.with_fields("bút".into(), 15000));

        assert_eq!(previous, Some(first.clone()));
        assert_eq!(catalog.list()[0].id, first.id);
        assert_eq!(catalog.list()[0].price, 15000);
        assert_eq!(catalog.list()[1].name, "thước");
        assert_eq!(catalog.total(), 20000);
    }

    #[test]
    fn update_missing_is_noop() {
        let mut catalog = CatalogFixture::new().with_default_seed().build();
        let before = catalog.list().to_vec();

        let stale = Product {
            id: ProductId::new(99),
            name: "ghost".into(),
            price: 1,
        };
        assert_eq!(catalog.update(stale), None);
        assert_eq!(catalog.list(), before.as_slice());
        assert_eq!(catalog.total(), 10000);
    }

    #[test]
    fn delete_removes_by_id() {
        let mut catalog = CatalogFixture::new()
            .with_product("a", 100)
            .with_product("b", 250)
            .build();

        let removed = catalog.delete(ProductId::new(1));

        assert_eq!(removed.map(|p| p.name), Some("a".to_string()));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.list()[0].id, ProductId::new(2));
        assert_eq!(catalog.total(), 250);
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut catalog = CatalogFixture::new().with_products(2).build();
        assert_eq!(catalog.delete(ProductId::new(7)), None);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut catalog = CatalogFixture::new().with_products(3).build();
        catalog.delete(ProductId::new(3));
        let next = catalog.create(Draft::new("late", 1));
        assert_eq!(next.id, ProductId::new(4));
    }

    #[test]
    fn seeded_assigns_ids_in_order() {
        let catalog = MemoryCatalog::seeded(vec![Draft::new("a", 1), Draft::new("b", 2)]);
        let ids: Vec<_> = catalog.list().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn events_carry_post_change_collection() {
        let mut catalog = CatalogFixture::new().with_default_seed().build();
        let totals = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&totals);
        catalog.subscribe(move |event| sink.borrow_mut().push(event.total()));

        catalog.create(Draft::new("vở", 5000));
        catalog.update(Product {
            id: ProductId::new(1),
            name: "bút".into(),
            price: 15000,
        });
        catalog.delete(ProductId::new(2));

        assert_eq!(*totals.borrow(), vec![15000, 20000, 15000]);
    }

    #[test]
    fn noop_mutations_emit_nothing() {
        let mut catalog = CatalogFixture::new().with_default_seed().build();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        catalog.subscribe(move |_| *counter.borrow_mut() += 1);

        catalog.delete(ProductId::new(42));
        catalog.update(Product {
            id: ProductId::new(42),
            name: String::new(),
            price: 0,
        });

        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn update_event_reports_before_and_after() {
        let mut catalog = CatalogFixture::new().with_default_seed().build();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        catalog.subscribe(move |event| sink.borrow_mut().push(event.change.clone()));

        let original = catalog.list()[0].clone();
        let edited = original.with_fields("bút bi".into(), 12000);
        catalog.update(edited.clone());

        assert_eq!(
            *changes.borrow(),
            vec![CatalogChange::Updated {
                before: original,
                after: edited,
            }]
        );
    }
}
