//! # Rendering Module
//!
//! Turns view state into terminal text using the templates in `templates.rs` and the named
//! styles in `styles.rs`.
//!
//! ## Design Philosophy
//!
//! Layout calculations (column widths, padding, truncation, price formatting) stay in Rust
//! because they need Unicode-aware width handling; product names are Vietnamese more often
//! than not. Templates only decide what is shown and which style applies.

use super::setup::session_help_entries;
use super::styles;
use super::templates::{FORM_TEMPLATE, HELP_TEMPLATE, LIST_TEMPLATE};
use colored::Colorize;
use minijinja::{Environment, Value};
use serde::Serialize;
use stockroom::api::StockroomApi;
use stockroom::commands::{CmdMessage, MessageLevel};
use stockroom::config::StockroomConfig;
use stockroom::store::Catalog;
use stockroom::views::{FormMode, FormView, ListModel};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Names wider than this are truncated in the list.
pub const MAX_NAME_WIDTH: usize = 40;
const COLUMN_GAP: &str = "  ";

#[derive(Serialize)]
struct RowData {
    id: String,
    name: String,
    price: String,
    edit: String,
    delete: String,
}

#[derive(Serialize)]
struct ListData {
    heading: String,
    add_button: String,
    search_placeholder: String,
    header: String,
    rows: Vec<RowData>,
    total_label: String,
    total: String,
    hint: String,
}

#[derive(Serialize)]
struct FormData {
    heading: String,
    notice: Option<String>,
    name_label: String,
    name_value: String,
    name_style: &'static str,
    price_label: String,
    price_value: String,
    price_style: &'static str,
    price_hint: Option<String>,
    save_button: String,
    hint: String,
}

#[derive(Serialize)]
struct HelpEntry {
    usage: String,
    about: String,
}

#[derive(Serialize)]
struct HelpData {
    entries: Vec<HelpEntry>,
}

pub struct Renderer {
    env: Environment<'static>,
    config: StockroomConfig,
}

impl Renderer {
    pub fn new(config: StockroomConfig, use_color: bool) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_filter("style", move |value: Value, name: String| -> String {
            styles::apply(&name, &value.to_string(), use_color)
        });
        Self { env, config }
    }

    /// Renders whichever view the session has mounted.
    pub fn render_view<C: Catalog>(&self, api: &StockroomApi<C>) -> String {
        if let Some(form) = api.form_view() {
            return self.render_form(form);
        }
        match api.list_view() {
            Some(list) => self.render_list(&list.model()),
            None => self.render_list(&ListModel {
                rows: api.catalog().list().to_vec(),
                total: api.catalog().total(),
                revision: 0,
            }),
        }
    }

    pub fn render_list(&self, model: &ListModel) -> String {
        let labels = &self.config.labels;

        let ids: Vec<String> = model.rows.iter().map(|p| format!("#{}", p.id)).collect();
        let names: Vec<String> = model
            .rows
            .iter()
            .map(|p| truncate_to_width(&p.name, MAX_NAME_WIDTH))
            .collect();
        let prices: Vec<String> = model
            .rows
            .iter()
            .map(|p| self.config.format_price(u128::from(p.price)))
            .collect();
        let total = self.config.format_price(model.total);

        let id_width = max_width(ids.iter().map(String::as_str).chain(["#"]));
        let mut name_width = max_width(
            names
                .iter()
                .map(String::as_str)
                .chain([labels.name_column.as_str()]),
        );
        // The total label spans the id and name columns.
        let span = labels.total_row.width();
        if span > id_width + COLUMN_GAP.len() + name_width {
            name_width = span - id_width - COLUMN_GAP.len();
        }
        let price_width = max_width(
            prices
                .iter()
                .map(String::as_str)
                .chain([labels.price_column.as_str(), total.as_str()]),
        );

        let header = [
            pad_right("#", id_width),
            pad_right(&labels.name_column, name_width),
            pad_left(&labels.price_column, price_width),
            labels.actions_column.clone(),
        ]
        .join(COLUMN_GAP);

        let rows = ids
            .into_iter()
            .zip(names)
            .zip(prices)
            .map(|((id, name), price)| RowData {
                id: pad_right(&id, id_width),
                name: pad_right(&name, name_width),
                price: pad_left(&price, price_width),
                edit: format!("[{}]", labels.edit_button),
                delete: format!("[{}]", labels.delete_button),
            })
            .collect();

        let data = ListData {
            heading: labels.list_heading.clone(),
            add_button: format!("[{}]", labels.add_button),
            search_placeholder: format!("[{}]", labels.search_placeholder),
            header,
            rows,
            total_label: pad_right(
                &labels.total_row,
                id_width + COLUMN_GAP.len() + name_width,
            ),
            total: pad_left(&total, price_width),
            hint: "add · edit <id> · delete <id> · help".to_string(),
        };
        self.render(LIST_TEMPLATE, &data)
    }

    pub fn render_form(&self, form: &FormView) -> String {
        let labels = &self.config.labels;
        let mode = form.mode();

        let heading = match &mode {
            FormMode::Create => labels.create_heading.clone(),
            FormMode::Edit(product) => format!("{} #{}", labels.edit_heading, product.id),
            FormMode::Missing(id) => format!("{} #{}", labels.edit_heading, id),
        };
        let notice = match &mode {
            FormMode::Missing(id) => Some(format!(
                "Product #{} no longer exists; saving will not change the catalog",
                id
            )),
            FormMode::Create | FormMode::Edit(_) => None,
        };

        let label_width = labels.name_column.width().max(labels.price_column.width());
        let (name_value, name_style) = if form.name().is_empty() {
            (labels.name_placeholder.clone(), "placeholder")
        } else {
            (form.name().to_string(), "value")
        };
        let raw_price = form.price_input();
        let (price_value, price_style) = if raw_price.trim().is_empty() {
            (labels.price_placeholder.clone(), "placeholder")
        } else {
            (raw_price.to_string(), "value")
        };
        let coerced = !raw_price.trim().is_empty() && form.price().to_string() != raw_price.trim();
        let price_hint = coerced.then(|| {
            format!(
                "(saves as {})",
                self.config.format_price(u128::from(form.price()))
            )
        });

        let data = FormData {
            heading,
            notice,
            name_label: pad_right(&labels.name_column, label_width),
            name_value,
            name_style,
            price_label: pad_right(&labels.price_column, label_width),
            price_value,
            price_style,
            price_hint,
            save_button: format!("[{}]", labels.save_button),
            hint: "name <text> · price <value> · save · back".to_string(),
        };
        self.render(FORM_TEMPLATE, &data)
    }

    pub fn render_help(&self) -> String {
        let entries = session_help_entries();
        let usage_width = max_width(entries.iter().map(|(usage, _)| usage.as_str()));
        let data = HelpData {
            entries: entries
                .into_iter()
                .map(|(usage, about)| HelpEntry {
                    usage: pad_right(&usage, usage_width),
                    about,
                })
                .collect(),
        };
        self.render(HELP_TEMPLATE, &data)
    }

    fn render<T: Serialize>(&self, template: &str, data: &T) -> String {
        self.env
            .render_str(template, data)
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| match message.level {
            MessageLevel::Info => message.content.dimmed().to_string(),
            MessageLevel::Success => message.content.green().to_string(),
            MessageLevel::Warning => message.content.yellow().to_string(),
            MessageLevel::Error => message.content.red().to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_messages(messages: &[CmdMessage]) {
    if !messages.is_empty() {
        println!("{}", render_messages(messages));
    }
}

fn max_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
