use crate::commands::{self, CmdResult};
use crate::model::{Product, ProductId};
use crate::route::{Navigator, Route};
use crate::store::{sum_prices, Catalog, SubscriptionId};
use std::cell::RefCell;
use std::rc::Rc;

/// What the list screen shows. `revision` counts catalog changes seen since mount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListModel {
    pub rows: Vec<Product>,
    pub total: u128,
    pub revision: u64,
}

impl ListModel {
    fn derive(products: &[Product], revision: u64) -> Self {
        Self {
            rows: products.to_vec(),
            total: sum_prices(products),
            revision,
        }
    }
}

#[derive(Debug)]
pub struct ListView {
    model: Rc<RefCell<ListModel>>,
    subscription: SubscriptionId,
}

impl ListView {
    pub fn mount<C: Catalog>(catalog: &mut C) -> Self {
        let model = Rc::new(RefCell::new(ListModel::derive(catalog.list(), 0)));
        let sink = Rc::clone(&model);
        let subscription = catalog.subscribe(move |event| {
            let mut model = sink.borrow_mut();
            let revision = model.revision + 1;
            *model = ListModel::derive(event.products, revision);
        });
        Self {
            model,
            subscription,
        }
    }

    pub fn unmount<C: Catalog>(self, catalog: &mut C) {
        catalog.unsubscribe(self.subscription);
    }

    /// Snapshot of what the list shows right now. Later catalog changes do not touch it.
    pub fn model(&self) -> ListModel {
        self.model.borrow().clone()
    }

    pub fn total(&self) -> u128 {
        self.model.borrow().total
    }

    pub fn add<N: Navigator>(&self, navigator: &mut N) {
        navigator.navigate(Route::Create);
    }

    pub fn edit<N: Navigator>(&self, id: ProductId, navigator: &mut N) {
        navigator.navigate(Route::Edit(id));
    }

    /// Deletes immediately; there is no confirmation step.
    pub fn delete<C: Catalog>(&self, id: ProductId, catalog: &mut C) -> CmdResult {
        commands::delete::run(catalog, id)
    }
}
