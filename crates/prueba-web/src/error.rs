//! Handler error types.

use std::path::PathBuf;

use prueba_core::{AggregateTestFailure, DuplicateTestName};

/// Result type alias for handler operations.
pub type Result<T> = std::result::Result<T, WebError>;

/// Request handler errors.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Page template could not be loaded.
    #[error("failed to load page template {}: {source}", path.display())]
    Page {
        /// Template path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Query string could not be decoded.
    #[error("invalid query string: {0}")]
    Query(#[from] serde_urlencoded::de::Error),

    /// The built-in suite could not be assembled.
    #[error("invalid test suite: {0}")]
    Suite(#[from] DuplicateTestName),

    /// At least one built-in test failed.
    #[error(transparent)]
    TestsFailed(#[from] AggregateTestFailure),

    /// Response body could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WebError {
    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
