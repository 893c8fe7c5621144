//! Error types for csvgun

use thiserror::Error;

/// csvgun error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed input record
    #[error("Parse error: {0}")]
    Parse(String),

    /// Registry key collision
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// Registry lookup miss
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
