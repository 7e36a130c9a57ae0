//! Error types for qa-labels
//!
//! Centralized error handling using thiserror. The classifier and reconciler
//! never fail; everything here comes from the runner and its collaborators.

use thiserror::Error;

/// All error types that can occur while labelling a pull request
#[derive(Debug, Error)]
pub enum QaLabelsError {
    /// The pull request has no comments to classify
    #[error("No comments found on {0}")]
    NoComments(String),

    /// Invalid or missing configuration input
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// GitHub answered with a non-success status
    #[error("GitHub API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for qa-labels operations
pub type Result<T> = std::result::Result<T, QaLabelsError>;
