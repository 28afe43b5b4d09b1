//! Error types for spatial-io.

use thiserror::Error;

/// Result type for spatial-io operations.
pub type Result<T> = std::result::Result<T, IoError>;

/// Errors that can occur while reading or writing scene documents.
///
/// These are whole-document rejections; recoverable per-object problems
/// surface as [`spatial_core::Warning`]s instead.
#[derive(Debug, Error)]
pub enum IoError {
    /// The input is not valid JSON in the document shape.
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but has no `objects` sequence.
    #[error("malformed document: missing 'objects' array")]
    MissingObjects,

    /// I/O error while loading or saving a document file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
