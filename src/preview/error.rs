//! Preview error types

use thiserror::Error;

/// Errors that can occur during preview generation
///
/// These never escape the picker; they are rendered as preview text.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// IO error while reading file
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    /// The path points at something that is not a regular file
    #[error("Not a file: {0}")]
    NotAFile(String),
}

/// Result type for preview operations
pub type Result<T> = std::result::Result<T, PreviewError>;
