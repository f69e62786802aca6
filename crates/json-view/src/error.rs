//! JSON view error types.

use thiserror::Error;

/// Errors from rendering the document text.
#[derive(Debug, Error)]
pub enum JsonViewError {
    /// Serializing the template (or one of its layers) failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type JsonViewResult<T> = Result<T, JsonViewError>;
