//! Store error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("passage not found: {0}")]
    NotFound(String),

    #[error("passage title must not be empty")]
    EmptyTitle,

    #[error("passage text must contain at least one word")]
    EmptyText,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid passage data: {0}")]
    Json(#[from] serde_json::Error),
}
