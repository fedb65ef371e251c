//! Error types for collaborator clients

use thiserror::Error;

/// Result type for collaborator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to external services
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a non-success status
    #[error("Service error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// XML response parse error
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Malformed response content
    #[error("Parse error: {0}")]
    Parse(String),

    /// Core workflow error
    #[error(transparent)]
    Core(#[from] patscout_core::Error),
}
