//! Error types for Pathstone

use thiserror::Error;

/// The main error type for Pathstone operations
#[derive(Debug, Error)]
pub enum PathstoneError {
    #[error("Fetch error: {0}")]
    FetchError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for Pathstone operations
pub type Result<T> = std::result::Result<T, PathstoneError>;

impl From<serde_json::Error> for PathstoneError {
    fn from(err: serde_json::Error) -> Self {
        PathstoneError::ParseError(err.to_string())
    }
}
