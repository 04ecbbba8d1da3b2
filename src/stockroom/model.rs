use crate::error::StockroomError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-minted identifier of a product. Never supplied by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ids arrive from routes and typed commands as text; `#3` and `3` are the same id.
impl FromStr for ProductId {
    type Err = StockroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(StockroomError::InvalidId(s.to_string()));
        }
        digits
            .parse()
            .map(ProductId)
            .map_err(|_| StockroomError::InvalidId(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
}

impl Product {
    /// Replaces the editable fields, keeping the identity.
    pub fn with_fields(&self, name: String, price: u64) -> Self {
        Self {
            id: self.id,
            name,
            price,
        }
    }
}

/// Field values of a product that does not exist yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    #[serde(default)]
    pub price: u64,
}

impl Draft {
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub(crate) fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
        }
    }
}

/// Coerces free-form price input to currency units.
///
/// Never fails: blank, signed, non-numeric or overflowing input becomes 0, and a
/// fractional part is dropped (`"12.9"` is 12).
pub fn parse_price(input: &str) -> u64 {
    let trimmed = input.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let whole = match unsigned.split_once('.') {
        Some((whole, fraction)) if fraction.bytes().all(|b| b.is_ascii_digit()) => whole,
        Some(_) => return 0,
        None => unsigned,
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    whole.parse().unwrap_or(0)
}
