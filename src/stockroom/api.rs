//! # API Facade
//!
//! The API layer is the single entry point for a stockroom session, regardless of
//! the UI driving it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the catalog, the navigation history and the mounted views
//! - **Normalizes inputs** (id and route strings into typed values)
//! - **Dispatches** user actions to the mounted view, or to the command layer
//! - **Mounts** the view matching the current route after every navigation
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs` and `views/*.rs`
//! - **Presentation**: no strings for the terminal beyond command messages
//!
//! ## Mounting
//!
//! Exactly one view is mounted at a time. `Route::List` mounts a [`ListView`];
//! `Route::Create` and `Route::Edit` mount a freshly resolved [`FormView`]. The
//! outgoing view is unsubscribed from the catalog before the next one mounts, so a
//! form abandoned with `back` leaves nothing behind.
//!
//! ## Generic Over Catalog
//!
//! `StockroomApi<C: Catalog>` works with any catalog implementation; the binary and
//! the tests both use `MemoryCatalog`.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::{Result, StockroomError};
use crate::model::{Draft, Product, ProductId};
use crate::route::{History, Navigator, Route};
use crate::store::Catalog;
use crate::views::{FormMode, FormView, ListView};

pub struct StockroomApi<C: Catalog> {
    catalog: C,
    history: History,
    list: Option<ListView>,
    form: Option<FormView>,
}

impl<C: Catalog> StockroomApi<C> {
    pub fn new(mut catalog: C) -> Self {
        let list = ListView::mount(&mut catalog);
        Self {
            catalog,
            history: History::new(),
            list: Some(list),
            form: None,
        }
    }

    pub fn route(&self) -> Route {
        self.history.current()
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn list_view(&self) -> Option<&ListView> {
        self.list.as_ref()
    }

    pub fn form_view(&self) -> Option<&FormView> {
        self.form.as_ref()
    }

    /// Navigates by path, e.g. `/edit/3`.
    pub fn open(&mut self, path: &str) -> Result<CmdResult> {
        let route: Route = path.parse()?;
        Ok(self.navigate(route))
    }

    pub fn navigate(&mut self, route: Route) -> CmdResult {
        self.history.navigate(route);
        self.remount()
    }

    /// Leaves the current view without committing anything.
    pub fn back(&mut self) -> CmdResult {
        let discarded = self.form.as_ref().is_some_and(FormView::is_dirty);
        self.history.back();
        let result = self.remount();
        if discarded {
            result.with_message(CmdMessage::info("Discarded unsaved changes"))
        } else {
            result
        }
    }

    pub fn list_products(&self) -> CmdResult {
        commands::list::run(&self.catalog)
    }

    /// List action: open a blank form.
    pub fn add_product(&mut self) -> CmdResult {
        match &self.list {
            Some(list) => list.add(&mut self.history),
            None => self.history.navigate(Route::Create),
        }
        self.remount()
    }

    /// List action: open the form for an existing product.
    pub fn edit_product(&mut self, id: &str) -> Result<CmdResult> {
        let id = parse_id(id)?;
        match &self.list {
            Some(list) => list.edit(id, &mut self.history),
            None => self.history.navigate(Route::Edit(id)),
        }
        let result = self.remount();

        Ok(match self.form.as_ref().map(FormView::mode) {
            Some(FormMode::Missing(id)) => result.with_message(
                CmdMessage::warning(format!("Product #{} not found; the form is blank", id)),
            ),
            _ => result,
        })
    }

    /// List action: delete immediately.
    pub fn delete_product(&mut self, id: &str) -> Result<CmdResult> {
        let id = parse_id(id)?;
        Ok(match &self.list {
            Some(list) => list.delete(id, &mut self.catalog),
            None => commands::delete::run(&mut self.catalog, id),
        })
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<CmdResult> {
        self.form
            .as_mut()
            .ok_or(StockroomError::NoForm)?
            .set_name(name);
        Ok(CmdResult::default())
    }

    pub fn set_price(&mut self, input: impl Into<String>) -> Result<CmdResult> {
        self.form
            .as_mut()
            .ok_or(StockroomError::NoForm)?
            .set_price(input);
        Ok(CmdResult::default())
    }

    /// Commits the mounted form and returns to the list.
    pub fn submit(&mut self) -> Result<CmdResult> {
        let form = self.form.as_ref().ok_or(StockroomError::NoForm)?;
        let result = form.submit(&mut self.catalog, &mut self.history);
        Ok(result.merge(self.remount()))
    }

    pub fn create_product(&mut self, draft: Draft) -> CmdResult {
        commands::create::run(&mut self.catalog, draft)
    }

    pub fn update_product(&mut self, product: Product) -> CmdResult {
        commands::update::run(&mut self.catalog, product)
    }

    /// Tears down whatever is mounted and mounts the view for the current route.
    fn remount(&mut self) -> CmdResult {
        if let Some(form) = self.form.take() {
            form.close(&mut self.catalog);
        }
        if let Some(list) = self.list.take() {
            list.unmount(&mut self.catalog);
        }

        match self.history.current() {
            Route::List => self.list = Some(ListView::mount(&mut self.catalog)),
            route => self.form = Some(FormView::open(&mut self.catalog, route.target())),
        }
        CmdResult::default()
    }
}

fn parse_id(input: &str) -> Result<ProductId> {
    input.parse()
}
