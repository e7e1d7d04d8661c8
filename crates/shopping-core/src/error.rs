//! Error types shared by the core crate.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShoppingError>;

#[derive(Debug, Error)]
pub enum ShoppingError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("import failed: {0}")]
    Import(String),
}
