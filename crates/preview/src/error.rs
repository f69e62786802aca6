//! Preview renderer error types.

use thiserror::Error;

/// Errors a preview renderer collaborator may raise.
///
/// These originate outside the core; the boundary in
/// [`crate::boundary::PreviewBoundary`] catches every one of them.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// A layer source could not be fetched or decoded.
    #[error("failed to load media: {reason}")]
    LoadFailed { reason: String },

    /// The renderer does not understand a layer's media.
    #[error("unsupported media: {src}")]
    UnsupportedMedia { src: String },

    /// Anything else the renderer reports.
    #[error("renderer error: {0}")]
    Other(String),
}

pub type PreviewResult<T> = Result<T, PreviewError>;
