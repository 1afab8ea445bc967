//! Message builder and MIME serialization.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use rand::Rng;
use tracing::debug;

use crate::attachment::Attachment;
use crate::content_type::ContentType;
use crate::error::Result;
use crate::header::Headers;

/// Number of random bytes in a generated boundary token.
const BOUNDARY_BYTES: usize = 24;

/// An email message under construction.
///
/// Envelope fields are plain public fields; attachments are kept behind
/// accessors so filename keys stay unique. Each message carries its own
/// random multipart boundary token, generated at construction.
#[derive(Debug, Clone)]
pub struct Message {
    /// Sender address.
    pub from: String,
    /// Primary recipient addresses.
    pub to: Vec<String>,
    /// Carbon-copy addresses.
    pub cc: Vec<String>,
    /// Blind-carbon-copy addresses. Never emitted as a header.
    pub bcc: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Body text.
    pub body: String,
    /// Content type of the body part.
    pub content_type: ContentType,
    attachments: Vec<Attachment>,
    boundary: String,
}

/// Generates a random per-message boundary token.
fn generate_boundary() -> String {
    let random_bytes: Vec<u8> = (0..BOUNDARY_BYTES)
        .map(|_| rand::thread_rng().r#gen::<u8>())
        .collect();
    URL_SAFE_NO_PAD.encode(random_bytes)
}

impl Message {
    fn with_content_type(
        subject: impl Into<String>,
        body: impl Into<String>,
        content_type: ContentType,
    ) -> Self {
        Self {
            from: String::new(),
            to: Vec::new(),
            cc: Vec::new(),
            bcc: Vec::new(),
            subject: subject.into(),
            body: body.into(),
            content_type,
            attachments: Vec::new(),
            boundary: generate_boundary(),
        }
    }

    /// Creates a plain text message.
    #[must_use]
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_content_type(subject, body, ContentType::TextPlain)
    }

    /// Creates an HTML message.
    #[must_use]
    pub fn new_html(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_content_type(subject, body, ContentType::TextHtml)
    }

    /// Adds a primary recipient.
    #[must_use]
    pub fn to(mut self, recipient: impl Into<String>) -> Self {
        self.to.push(recipient.into());
        self
    }

    /// Adds a CC recipient.
    #[must_use]
    pub fn cc(mut self, recipient: impl Into<String>) -> Self {
        self.cc.push(recipient.into());
        self
    }

    /// Adds a BCC recipient.
    #[must_use]
    pub fn bcc(mut self, recipient: impl Into<String>) -> Self {
        self.bcc.push(recipient.into());
        self
    }

    /// Stores an attachment, replacing any existing entry with the same
    /// filename in place.
    fn store(&mut self, filename: String, data: Vec<u8>, inline: bool, headers: Headers) {
        debug!(filename, bytes = data.len(), inline, "attachment stored");

        let attachment = Attachment::new(filename, data, inline, headers);
        match self
            .attachments
            .iter_mut()
            .find(|existing| existing.filename == attachment.filename)
        {
            Some(existing) => *existing = attachment,
            None => self.attachments.push(attachment),
        }
    }

    fn attach_path(&mut self, path: &Path, inline: bool) -> Result<()> {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;

        let data = fs::read(path)?;
        self.store(filename, data, inline, Headers::new());
        Ok(())
    }

    /// Attaches the file at `path`, fully buffered, keyed by its base name.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read. The message
    /// stays valid on failure.
    pub fn attach(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.attach_path(path.as_ref(), false)
    }

    /// Attaches the file at `path` as inline content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read. The message
    /// stays valid on failure.
    pub fn inline(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.attach_path(path.as_ref(), true)
    }

    /// Reads `reader` to the end and stores the content as a regular
    /// attachment keyed by `filename`, with the supplied extra headers.
    ///
    /// # Errors
    ///
    /// Returns an error if the read does not complete. The message stays
    /// valid on failure.
    pub fn attach_reader<R: Read>(
        &mut self,
        mut reader: R,
        filename: impl Into<String>,
        headers: Headers,
    ) -> Result<()> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.store(filename.into(), data, false, headers);
        Ok(())
    }

    /// Reads `reader` to the end and stores the content as an inline
    /// attachment keyed by `filename`, with the supplied extra headers.
    ///
    /// # Errors
    ///
    /// Returns an error if the read does not complete. The message stays
    /// valid on failure.
    pub fn inline_reader<R: Read>(
        &mut self,
        mut reader: R,
        filename: impl Into<String>,
        headers: Headers,
    ) -> Result<()> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.store(filename.into(), data, true, headers);
        Ok(())
    }

    /// Looks up an attachment by filename.
    #[must_use]
    pub fn attachment(&self, filename: &str) -> Option<&Attachment> {
        self.attachments
            .iter()
            .find(|attachment| attachment.filename == filename)
    }

    /// Attachments in insertion order.
    pub fn attachments(&self) -> impl Iterator<Item = &Attachment> {
        self.attachments.iter()
    }

    /// The multipart boundary token used when serializing this message.
    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Returns all recipients: To, then Cc, then Bcc, order preserved and
    /// duplicates retained.
    #[must_use]
    pub fn recipients(&self) -> Vec<&str> {
        self.to
            .iter()
            .chain(&self.cc)
            .chain(&self.bcc)
            .map(String::as_str)
            .collect()
    }

    /// Renders the message to RFC 2822 wire bytes.
    ///
    /// Output is deterministic for a given message except for the `Date`
    /// header, which is taken from the clock at call time. With attachments
    /// the body and each attachment become parts of a multipart/mixed
    /// entity delimited by this message's boundary token.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = String::new();

        let _ = writeln!(out, "From: {}\r", self.from);
        let _ = writeln!(out, "Date: {}\r", Utc::now().to_rfc2822());
        let _ = writeln!(out, "To: {}\r", self.to.join(", "));
        if !self.cc.is_empty() {
            let _ = writeln!(out, "Cc: {}\r", self.cc.join(", "));
        }
        let _ = writeln!(out, "Subject: {}\r", self.subject);
        out.push_str("MIME-Version: 1.0\r\n");

        if self.attachments.is_empty() {
            let _ = writeln!(out, "Content-Type: {}; charset=utf-8\r", self.content_type);
            out.push_str("\r\n");
            out.push_str(&self.body);
            out.push_str("\r\n");
            return out.into_bytes();
        }

        let _ = writeln!(
            out,
            "Content-Type: multipart/mixed; boundary=\"{}\"\r",
            self.boundary
        );
        out.push_str("\r\n");

        // Body part
        let _ = writeln!(out, "--{}\r", self.boundary);
        let _ = writeln!(out, "Content-Type: {}; charset=utf-8\r", self.content_type);
        out.push_str("\r\n");
        out.push_str(&self.body);
        out.push_str("\r\n");

        let mut buf = out.into_bytes();
        for attachment in &self.attachments {
            buf.extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
            buf.extend_from_slice(&attachment.to_bytes());
            buf.extend_from_slice(b"\r\n");
        }
        buf.extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());

        buf
    }
}
