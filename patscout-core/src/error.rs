//! Error types for Patscout

use thiserror::Error;

/// Result type alias for Patscout operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Patscout operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Extraction collaborator error
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// User input validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
