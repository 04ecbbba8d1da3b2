//! # Views
//!
//! UI-agnostic view state. A view here is the data a screen shows plus the actions
//! it offers; turning that into characters is the client's job (see the binary's
//! `cli::render`).
//!
//! - [`list::ListView`]: rows and total, kept current through a catalog subscription.
//! - [`form::FormView`]: create/edit form with local, uncommitted field state.
//!
//! Views act on the catalog only through the command layer, and on navigation only
//! through a [`crate::route::Navigator`].

pub mod form;
pub mod list;

pub use form::{FormMode, FormView};
pub use list::{ListModel, ListView};
