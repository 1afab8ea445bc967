//! Error types for message delivery.

/// Result type alias for delivery operations.
pub type Result<T> = std::result::Result<T, TransportError>;

/// Delivery error types.
///
/// Transport failures are surfaced verbatim; there is no retry and no
/// per-recipient delivery status at this layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Server address string could not be parsed as `host[:port]`.
    #[error("Invalid server address: {0}")]
    InvalidServer(String),

    /// A sender or recipient address was rejected by the client library.
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The envelope could not be built (e.g. no recipients).
    #[error("Invalid envelope: {0}")]
    Envelope(#[from] lettre::error::Error),

    /// SMTP-level failure: connection, authentication, or delivery.
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
