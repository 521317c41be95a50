//! Error types for blobkey operations.

use thiserror::Error;

/// Result type alias for blobkey operations.
pub type Result<T> = std::result::Result<T, BlobkeyError>;

/// Errors that can occur during blobkey operations.
#[derive(Error, Debug)]
pub enum BlobkeyError {
    /// IO operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Compression or decompression failed.
    #[error("compression error: {0}")]
    Compression(String),
}
