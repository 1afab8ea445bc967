//! # mailcraft-smtp
//!
//! SMTP delivery for [`mailcraft_mime`] messages.
//!
//! This crate is a thin shim over an external SMTP client: it flattens the
//! recipient list, serializes the message, and hands both to a transport.
//! The transport is responsible for connection establishment, the
//! authentication handshake, and the DATA exchange; any failure it reports
//! is surfaced verbatim, with no retry and no per-recipient status.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailcraft_mime::Message;
//! use mailcraft_smtp::{send, Credentials};
//!
//! let mut message = Message::new("Test", "Hello, World!")
//!     .to("recipient@example.com");
//! message.from = "sender@example.com".to_string();
//!
//! let credentials = Credentials::new("user".to_string(), "password".to_string());
//! send("smtp.example.com:587", Some(credentials), &message)?;
//! ```
//!
//! ## Testing without a network
//!
//! The [`Transport`] trait is the seam: implement it with a capturing fake
//! and drive [`send_with`] to inspect the exact submitted bytes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
mod transport;

pub use error::{Result, TransportError};
pub use transport::{SmtpRelay, Transport, send, send_with};

// Callers build auth credentials with the client library's own type.
pub use lettre::transport::smtp::authentication::Credentials;
