use crate::model::Product;

pub mod create;
pub mod delete;
pub mod list;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listed_products: Vec<Product>,
    pub total: Option<u128>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_total(mut self, total: u128) -> Self {
        self.total = Some(total);
        self
    }

    /// Appends another result, keeping message order.
    pub fn merge(mut self, other: CmdResult) -> Self {
        self.affected_products.extend(other.affected_products);
        self.listed_products.extend(other.listed_products);
        self.total = other.total.or(self.total);
        self.messages.extend(other.messages);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}
