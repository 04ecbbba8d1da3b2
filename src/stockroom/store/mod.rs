//! # Storage Layer
//!
//! This module defines the catalog abstraction for stockroom. The [`Catalog`] trait
//! is the single source of truth for product records: every mutation goes through
//! `create`, `update` or `delete`, and the total is derived from the live collection.
//!
//! ## Implementations
//!
//! - [`memory::MemoryCatalog`]: ordered in-memory collection
//!   - Ids minted from a monotonic counter, never reused
//!   - Lives for one session, nothing is persisted
//!
//! ## Absence Is Not an Error
//!
//! Updating or deleting an id the catalog does not hold is a silent no-op that
//! returns `None`. The command layer decides whether that deserves a message.
//!
//! ## Change Notifications
//!
//! Each applied mutation emits one [`CatalogEvent`] through the catalog's
//! [`feed::ChangeFeed`]. The event carries what changed plus the collection as it
//! is *after* the change, which is everything a view needs to re-derive itself.
//! No-op updates and deletes emit nothing.

use crate::model::{Draft, Product, ProductId};

pub mod feed;
pub mod memory;

pub use feed::SubscriptionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogChange {
    Created(Product),
    Updated { before: Product, after: Product },
    Deleted(Product),
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogEvent<'a> {
    pub change: &'a CatalogChange,
    pub products: &'a [Product],
}

impl CatalogEvent<'_> {
    pub fn total(&self) -> u128 {
        sum_prices(self.products)
    }
}

pub(crate) fn sum_prices(products: &[Product]) -> u128 {
    products.iter().map(|p| u128::from(p.price)).sum()
}

/// Ordered product collection with change notifications.
pub trait Catalog {
    /// Mint a fresh id, append the record and return it.
    fn create(&mut self, draft: Draft) -> Product;

    /// Replace the record with the same id in place, returning the previous one.
    fn update(&mut self, product: Product) -> Option<Product>;

    /// Remove a record, returning it if it existed.
    fn delete(&mut self, id: ProductId) -> Option<Product>;

    fn get(&self, id: ProductId) -> Option<&Product>;

    /// Current records in insertion order.
    fn list(&self) -> &[Product];

    /// Sum of all current prices, recomputed on every call.
    fn total(&self) -> u128 {
        sum_prices(self.list())
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CatalogEvent<'_>) + 'static;

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}
