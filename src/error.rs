//! Error types for docdesk
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

use crate::api::FailureKind;

/// All error types that can occur in docdesk
#[derive(Debug, Error)]
pub enum DocdeskError {
    /// Session flag backend could not be read or written
    #[error("Session error: {0}")]
    Session(String),

    /// An API call failed; the interceptors have already observed it
    #[error("Call to '{path}' failed: {kind}")]
    Call { path: String, kind: FailureKind },

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for docdesk operations
pub type Result<T> = std::result::Result<T, DocdeskError>;
