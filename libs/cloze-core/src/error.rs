//! Error types for cloze-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors that can occur during quiz session operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("kelvin target {target} out of range 0..={max}")]
    OutOfRange { target: usize, max: usize },
}
