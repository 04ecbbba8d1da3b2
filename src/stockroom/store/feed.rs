//! Change notifications for the catalog.
//!
//! Views register a listener and re-derive whatever they display from the
//! post-change collection handed to them. Listeners run synchronously, in
//! subscription order, right after the mutation they describe.

use super::CatalogEvent;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&CatalogEvent<'_>)>;

#[derive(Default)]
pub struct ChangeFeed {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CatalogEvent<'_>) + 'static,
    {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.listeners.push((id, Box::new(listener)));
        debug!(subscription = id.0, "catalog listener subscribed");
        id
    }

    /// Returns false when the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        let removed = self.listeners.len() != before;
        if removed {
            debug!(subscription = id.0, "catalog listener unsubscribed");
        }
        removed
    }

    pub fn emit(&mut self, event: &CatalogEvent<'_>) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for ChangeFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeFeed")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Draft, ProductId};
    use crate::store::CatalogChange;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn created_event(change: &CatalogChange) -> CatalogEvent<'_> {
        CatalogEvent {
            change,
            products: &[],
        }
    }

    #[test]
    fn listeners_run_in_subscription_order() {
        let mut feed = ChangeFeed::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&seen);
        feed.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&seen);
        feed.subscribe(move |_| second.borrow_mut().push("second"));

        let change =
            CatalogChange::Created(Draft::new("bút", 1).into_product(ProductId::new(1)));
        feed.emit(&created_event(&change));

        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let mut feed = ChangeFeed::new();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let id = feed.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(feed.unsubscribe(id));
        assert!(!feed.unsubscribe(id));
        assert!(feed.is_empty());

        let change =
            CatalogChange::Deleted(Draft::new("bút", 1).into_product(ProductId::new(1)));
        feed.emit(&created_event(&change));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn subscription_ids_are_distinct() {
        let mut feed = ChangeFeed::new();
        let a = feed.subscribe(|_| {});
        let b = feed.subscribe(|_| {});
        assert_ne!(a, b);
        assert_eq!(feed.len(), 2);
    }
}
