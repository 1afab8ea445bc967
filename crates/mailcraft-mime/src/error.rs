//! Error types for MIME operations.

use std::io;

/// Result type alias for MIME operations.
pub type Result<T> = std::result::Result<T, Error>;

/// MIME error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error while reading attachment content.
    ///
    /// The message the attach call was made on stays valid; the caller may
    /// retry the attach or send without it.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Base64 decode error.
    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),
}
