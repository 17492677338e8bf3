use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderPadError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("No history entry at index {0}")]
    EntryNotFound(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, OrderPadError>;
