use crate::model::ProductId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaresError {
    /// A draft or record failed validation; the store was left untouched.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Record not found: {0}")]
    RecordNotFound(ProductId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, WaresError>;
