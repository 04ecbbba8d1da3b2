use crate::error::{Result, StockroomError};
use crate::model::Draft;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_CURRENCY: &str = "VND";
const DEFAULT_GROUPING_SEPARATOR: &str = ",";

/// Session configuration, read from an optional JSON file.
///
/// Every field has a default, so a partial file (or none at all) is fine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockroomConfig {
    /// Suffix printed after every price
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Inserted between groups of three digits
    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: String,

    /// Products the catalog starts with, in order
    #[serde(default = "default_seed")]
    pub seed: Vec<Draft>,

    #[serde(default)]
    pub labels: Labels,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_grouping_separator() -> String {
    DEFAULT_GROUPING_SEPARATOR.to_string()
}

fn default_seed() -> Vec<Draft> {
    vec![Draft::new("bút", 10000)]
}

impl Default for StockroomConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            grouping_separator: default_grouping_separator(),
            seed: default_seed(),
            labels: Labels::default(),
        }
    }
}

impl StockroomConfig {
    /// Loads the config at `path`, or the defaults when no path is given.
    ///
    /// An explicit path that is missing or malformed is an error.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let path = path.as_ref();

        if !path.exists() {
            return Err(StockroomError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let config: StockroomConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Formats a price with digit grouping and the currency suffix.
    pub fn format_price(&self, price: u128) -> String {
        let digits = price.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&self.grouping_separator);
            }
            grouped.push(c);
        }

        if self.currency.is_empty() {
            grouped
        } else {
            format!("{} {}", grouped, self.currency)
        }
    }
}

/// Captions shown by the renderer. Defaults are the original Vietnamese UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Labels {
    pub list_heading: String,
    pub add_button: String,
    pub search_placeholder: String,
    pub name_column: String,
    pub price_column: String,
    pub actions_column: String,
    pub total_row: String,
    pub edit_button: String,
    pub delete_button: String,
    pub create_heading: String,
    pub edit_heading: String,
    pub name_placeholder: String,
    pub price_placeholder: String,
    pub save_button: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            list_heading: "Bảng Thông Tin".into(),
            add_button: "Thêm Hàng Hóa".into(),
            search_placeholder: "Tìm kiếm...".into(),
            name_column: "Tên".into(),
            price_column: "Giá".into(),
            actions_column: "Thao tác".into(),
            total_row: "Tổng số".into(),
            edit_button: "Chỉnh sửa".into(),
            delete_button: "Xóa".into(),
            create_heading: "Thêm Hàng Hóa".into(),
            edit_heading: "Chỉnh sửa Hàng Hóa".into(),
            name_placeholder: "Tên sản phẩm".into(),
            price_placeholder: "Giá sản phẩm".into(),
            save_button: "Lưu".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = StockroomConfig::default();
        assert_eq!(config.currency, "VND");
        assert_eq!(config.seed, vec![Draft::new("bút", 10000)]);
        assert_eq!(config.labels.save_button, "Lưu");
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = StockroomConfig::load(None::<&Path>).unwrap();
        assert_eq!(config, StockroomConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = StockroomConfig::load(Some(dir.path().join("nope.json")));
        assert!(matches!(result, Err(StockroomError::Config(_))));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "currency": "USD", "seed": [], "labels": {{ "save_button": "Save" }} }}"#
        )
        .unwrap();

        let config = StockroomConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.currency, "USD");
        assert_eq!(config.grouping_separator, ",");
        assert!(config.seed.is_empty());
        assert_eq!(config.labels.save_button, "Save");
        assert_eq!(config.labels.total_row, "Tổng số");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let result = StockroomConfig::load(Some(file.path()));
        assert!(matches!(result, Err(StockroomError::Serialization(_))));
    }

    #[test]
    fn test_format_price_groups_digits() {
        let config = StockroomConfig::default();
        assert_eq!(config.format_price(0), "0 VND");
        assert_eq!(config.format_price(999), "999 VND");
        assert_eq!(config.format_price(10000), "10,000 VND");
        assert_eq!(config.format_price(1234567), "1,234,567 VND");
    }

    #[test]
    fn test_format_price_custom_separator_and_no_currency() {
        let config = StockroomConfig {
            currency: String::new(),
            grouping_separator: ".".into(),
            ..StockroomConfig::default()
        };
        assert_eq!(config.format_price(1500000), "1.500.000");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = StockroomConfig {
            currency: "EUR".into(),
            seed: vec![Draft::new("pen", 3)],
            ..StockroomConfig::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: StockroomConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
