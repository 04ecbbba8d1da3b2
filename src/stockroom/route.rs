//! # Routing
//!
//! Three logical destinations and the capability to move between them.
//!
//! | Route            | Path          | Mounted view         |
//! |------------------|---------------|----------------------|
//! | `Route::List`    | `/`           | list                 |
//! | `Route::Create`  | `/add`        | blank form           |
//! | `Route::Edit(id)`| `/edit/{id}`  | form loaded from `id`|
//!
//! Views never mount each other. They call [`Navigator::navigate`] and whoever
//! owns the navigator decides what to mount for the new route.

use crate::error::{Result, StockroomError};
use crate::model::ProductId;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    List,
    Create,
    Edit(ProductId),
}

impl Route {
    /// The record a form on this route should load, if any.
    pub fn target(&self) -> Option<ProductId> {
        match self {
            Route::Edit(id) => Some(*id),
            Route::List | Route::Create => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => write!(f, "/"),
            Route::Create => write!(f, "/add"),
            Route::Edit(id) => write!(f, "/edit/{}", id),
        }
    }
}

impl FromStr for Route {
    type Err = StockroomError;

    fn from_str(s: &str) -> Result<Self> {
        let path = s.trim().trim_start_matches('/').trim_end_matches('/');
        match path {
            "" | "list" => Ok(Route::List),
            "add" => Ok(Route::Create),
            _ => match path.strip_prefix("edit/") {
                Some(id) => Ok(Route::Edit(id.parse()?)),
                None => Err(StockroomError::UnknownRoute(s.to_string())),
            },
        }
    }
}

pub trait Navigator {
    fn navigate(&mut self, route: Route);

    fn current(&self) -> Route;
}

/// Stack-based navigator. The root entry is always the list and is never popped.
#[derive(Debug, Clone)]
pub struct History {
    stack: Vec<Route>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::List],
        }
    }

    /// Pops the current entry and returns the one now on top.
    pub fn back(&mut self) -> Route {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        let current = self.current();
        debug!(route = %current, "navigated back");
        current
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Navigator for History {
    fn navigate(&mut self, route: Route) {
        debug!(%route, "navigate");
        if route == Route::List {
            // Returning to the list ends any form flow.
            self.stack.truncate(1);
            return;
        }
        self.stack.push(route);
    }

    fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or_default()
    }
}
