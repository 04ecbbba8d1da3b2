//! # Form View
//!
//! One form serves both creating and editing. What it does is decided once, at
//! open time, by resolving the optional target id against the catalog:
//!
//! | Target       | Lookup     | Mode                  | Initial fields        |
//! |--------------|------------|-----------------------|-----------------------|
//! | none         | n/a        | `FormMode::Create`    | `""`, `0`             |
//! | `Some(id)`   | found      | `FormMode::Edit(p)`   | `p.name`, `p.price`   |
//! | `Some(id)`   | not found  | `FormMode::Missing(id)` | `""`, `0`           |
//!
//! `Missing` is its own mode: a stale edit link must never turn into
//! a create. Submitting it issues an update for the stale id, which the catalog
//! ignores, and the result carries a warning.
//!
//! Field edits stay local until [`FormView::submit`], which makes exactly one
//! create or update call and then navigates back to the list. Calling it twice
//! commits twice.

use crate::commands::{self, CmdResult};
use crate::model::{parse_price, Draft, Product, ProductId};
use crate::route::{Navigator, Route};
use crate::store::{Catalog, CatalogChange, SubscriptionId};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(Product),
    Missing(ProductId),
}

impl FormMode {
    pub fn resolve<C: Catalog>(catalog: &C, target: Option<ProductId>) -> Self {
        match target {
            None => FormMode::Create,
            Some(id) => match catalog.get(id) {
                Some(product) => FormMode::Edit(product.clone()),
                None => FormMode::Missing(id),
            },
        }
    }

    /// True whenever a target id was supplied, found or not.
    pub fn is_edit(&self) -> bool {
        !matches!(self, FormMode::Create)
    }

    fn initial_fields(&self) -> (String, u64) {
        match self {
            FormMode::Edit(product) => (product.name.clone(), product.price),
            FormMode::Create | FormMode::Missing(_) => (String::new(), 0),
        }
    }
}

#[derive(Debug)]
pub struct FormView {
    mode: Rc<RefCell<FormMode>>,
    name: String,
    price_input: String,
    subscription: Option<SubscriptionId>,
}

impl FormView {
    pub fn open<C: Catalog>(catalog: &mut C, target: Option<ProductId>) -> Self {
        let mode = FormMode::resolve(catalog, target);
        let (name, price) = mode.initial_fields();
        let mode = Rc::new(RefCell::new(mode));

        let subscription = target.map(|id| {
            let sink = Rc::clone(&mode);
            catalog.subscribe(move |event| match event.change {
                CatalogChange::Updated { after, .. } if after.id == id => {
                    *sink.borrow_mut() = FormMode::Edit(after.clone());
                }
                CatalogChange::Deleted(product) if product.id == id => {
                    *sink.borrow_mut() = FormMode::Missing(id);
                }
                _ => {}
            })
        });

        Self {
            mode,
            name,
            price_input: price.to_string(),
            subscription,
        }
    }

    pub fn close<C: Catalog>(self, catalog: &mut C) {
        if let Some(subscription) = self.subscription {
            catalog.unsubscribe(subscription);
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode.borrow().clone()
    }

    pub fn is_edit(&self) -> bool {
        self.mode.borrow().is_edit()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The price exactly as typed.
    pub fn price_input(&self) -> &str {
        &self.price_input
    }

    /// The price as it would be committed.
    pub fn price(&self) -> u64 {
        parse_price(&self.price_input)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, input: impl Into<String>) {
        self.price_input = input.into();
    }

    /// Whether the fields differ from what the current mode would start with.
    pub fn is_dirty(&self) -> bool {
        let (name, price) = self.mode.borrow().initial_fields();
        self.name != name || self.price() != price
    }

    pub fn submit<C: Catalog, N: Navigator>(
        &self,
        catalog: &mut C,
        navigator: &mut N,
    ) -> CmdResult {
        let mode = self.mode();
        let name = self.name.clone();
        let price = self.price();

        let result = match mode {
            FormMode::Create => commands::create::run(catalog, Draft::new(name, price)),
            FormMode::Edit(original) => {
                commands::update::run(catalog, original.with_fields(name, price))
            }
            FormMode::Missing(id) => commands::update::run(catalog, Product { id, name, price }),
        };

        navigator.navigate(Route::List);
        result
    }
}
