//! # CLI Layer
//!
//! This module is **one possible UI client** for stockroom, not the application itself.
//! It plays the part a browser plays for a web front end: it shows the mounted view,
//! collects one user action at a time and hands it to the API.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Uses `std::process::exit` (via `main.rs`)
//! - Handles argument and session-line parsing
//! - Formats output for human consumption
//!
//! ## Session Loop
//!
//! 1. **Startup**: parse process arguments, install logging, load config, seed the catalog
//! 2. **Read**: one line from stdin, parsed into a [`setup::SessionCommand`]
//! 3. **Dispatch**: call the matching `StockroomApi` method
//! 4. **Render**: print the mounted view, then the command's messages
//!
//! A bad line (unknown command, invalid id, no form open) prints an error and the loop
//! continues. End of input ends the session.
//!
//! ## Structure
//!
//! - `commands`: `run()` and per-command dispatch
//! - `setup`: clap definitions for process args and session lines
//! - `render` / `templates` / `styles`: templated, themed output
//! - `logging`: tracing subscriber setup

mod commands;
mod logging;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
