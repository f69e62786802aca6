//! Error types for template loading (thiserror-based).

use thiserror::Error;

/// Errors that can occur while loading a template document.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// File I/O error (read, path resolution).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse or shape error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The template file path does not exist or is not a file.
    #[error("Template file not found: {path}")]
    NotFound { path: String },

    /// The document parsed but violates a structural requirement.
    #[error("Invalid template: {reason}")]
    Invalid { reason: String },
}

/// Convenience Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;
