use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Named styles available to templates through the `style` filter.
pub static STOCKROOM_THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        ("heading", Style::new().bold().cyan()),
        ("button", Style::new().white().on_blue()),
        ("save", Style::new().white().on_green()),
        ("placeholder", Style::new().dim().italic()),
        ("header", Style::new().bold().underlined()),
        ("id", Style::new().yellow()),
        ("price", Style::new()),
        ("action", Style::new().blue()),
        ("danger", Style::new().red()),
        ("total", Style::new().bold()),
        ("label", Style::new().bold()),
        ("value", Style::new()),
        ("warning", Style::new().yellow()),
        ("hint", Style::new().dim()),
    ])
});

/// Applies a named style. Unknown names and disabled color leave the text untouched.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match STOCKROOM_THEME.get(name) {
        Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
        _ => text.to_string(),
    }
}
