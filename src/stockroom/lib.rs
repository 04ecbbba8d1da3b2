//! # Stockroom Architecture
//!
//! Stockroom is a **UI-agnostic inventory library**: an in-memory product catalog,
//! the list and form views that read and write it, and the routing contract that
//! moves a session between them. The terminal binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads session commands, renders views, prints messages   │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns catalog, history and the mounted view               │
//! │  - Normalizes inputs (id and path strings → typed values)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View Layer (views/) + Routing (route.rs)                   │
//! │  - ListView: rows + total, kept current by subscription     │
//! │  - FormView: create/edit resolution, one commit per submit  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create / update / delete / list, returning CmdResult     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Catalog trait, MemoryCatalog, change feed                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! - Ids are minted by the catalog from a counter and never reused.
//! - The total is recomputed from the live records on every read.
//! - Updating or deleting an unknown id changes nothing. Commands report it as a
//!   warning; nothing in the core returns an error for it.
//! - An edit route whose id is gone resolves to [`views::FormMode::Missing`], never
//!   to a blank create.
//!
//! ## Threading
//!
//! Every mutation is synchronous and happens in response to one user action. View
//! state is shared with catalog listeners through `Rc<RefCell<_>>`, so none of the
//! session types are `Send`.
//!
//! ## Module Overview
//!
//! - [`api`]: The session facade, entry point for all operations
//! - [`commands`]: Business logic for each catalog operation
//! - [`views`]: List and form view state and actions
//! - [`route`]: Routes, the `Navigator` capability and `History`
//! - [`store`]: Catalog abstraction, in-memory implementation, change feed
//! - [`model`]: Core data types (`Product`, `Draft`, `ProductId`) and price coercion
//! - [`config`]: Session configuration
//! - [`error`]: Error types
//! - `cli`: Session loop, templated rendering and logging setup for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod route;
pub mod store;
pub mod views;
