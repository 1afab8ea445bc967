//! # mailcraft-mime
//!
//! MIME message building and serialization for email.
//!
//! ## Features
//!
//! - **Message building**: Envelope fields, plain text or HTML bodies
//! - **Attachments**: From a file path or any reader, regular or inline
//! - **Serialization**: RFC 2822 headers plus multipart/mixed framing
//! - **Encoding**: Base64 attachment bodies, wrapped per RFC 2045
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailcraft_mime::Message;
//!
//! let mut message = Message::new("Test Message", "Hello, World!")
//!     .to("recipient@example.com")
//!     .cc("copy@example.com");
//! message.from = "sender@example.com".to_string();
//!
//! message.attach("document.pdf")?;
//!
//! let bytes = message.to_bytes();
//! ```
//!
//! ## HTML bodies
//!
//! ```ignore
//! use mailcraft_mime::Message;
//!
//! let message = Message::new_html("Test", "<h1>Hello</h1>")
//!     .to("recipient@example.com");
//! ```
//!
//! ## Attachments from readers
//!
//! ```ignore
//! use mailcraft_mime::{Headers, Message};
//!
//! let mut message = Message::new("Report", "See attached.");
//! message.attach_reader(csv_reader, "report.csv", Headers::new())?;
//! message.inline("logo.png")?;
//! ```
//!
//! Serialization is deterministic for a given message apart from the `Date`
//! header. Each message uses its own random multipart boundary token, so
//! part content can never collide with the delimiter of another message.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod attachment;
mod content_type;
mod error;
mod header;
mod message;

pub mod encoding;

pub use attachment::Attachment;
pub use content_type::ContentType;
pub use error::{Error, Result};
pub use header::Headers;
pub use message::Message;
