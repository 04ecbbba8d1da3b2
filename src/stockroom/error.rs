use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockroomError {
    #[error("Invalid product id: {0}")]
    InvalidId(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("No form is open (use `add` or `edit <id>` first)")]
    NoForm,

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StockroomError>;
