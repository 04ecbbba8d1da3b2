//! # CLI Templates
//!
//! Output is rendered from minijinja templates kept in `templates/` and included here as
//! string constants, so they can be edited and diffed apart from the Rust code.
//!
//! The environment runs with `trim_blocks` and `lstrip_blocks`, so a line holding only a
//! block tag produces no output of its own. Layout (column widths, padding, number
//! formatting) is computed in Rust; templates pick styles and decide what is shown.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const FORM_TEMPLATE: &str = include_str!("templates/form.tmp");
pub const HELP_TEMPLATE: &str = include_str!("templates/help.tmp");
