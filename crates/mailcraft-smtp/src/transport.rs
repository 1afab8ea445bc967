//! SMTP delivery through an external transport.

use lettre::address::{Address, Envelope};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport as _};
use mailcraft_mime::Message;
use tracing::debug;

use crate::error::{Result, TransportError};

/// Default SMTP port when the server string carries none.
const DEFAULT_SMTP_PORT: u16 = 25;

/// A capability that can deliver serialized message bytes.
///
/// The transport owns connection establishment, the authentication
/// handshake, and the SMTP DATA exchange. Failures are reported verbatim;
/// no retry happens at this layer.
pub trait Transport {
    /// Delivers `message` from `from` to every address in `recipients`.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport rejects an address or the delivery
    /// fails.
    fn send(&self, from: &str, recipients: &[&str], message: &[u8]) -> Result<()>;
}

/// SMTP relay backed by the lettre client library.
#[derive(Debug, Clone)]
pub struct SmtpRelay {
    host: String,
    port: u16,
    credentials: Option<Credentials>,
}

impl SmtpRelay {
    /// Creates a relay for `server`, given as `host` or `host:port`.
    ///
    /// # Errors
    ///
    /// Returns an error if the port part is not a valid number.
    pub fn open(server: &str, credentials: Option<Credentials>) -> Result<Self> {
        let (host, port) = match server.rsplit_once(':') {
            Some((host, port)) => {
                let port = port
                    .parse()
                    .map_err(|_| TransportError::InvalidServer(server.to_string()))?;
                (host, port)
            }
            None => (server, DEFAULT_SMTP_PORT),
        };

        Ok(Self {
            host: host.to_string(),
            port,
            credentials,
        })
    }
}

impl Transport for SmtpRelay {
    fn send(&self, from: &str, recipients: &[&str], message: &[u8]) -> Result<()> {
        let sender = from.parse::<Address>()?;
        let rcpts = recipients
            .iter()
            .map(|recipient| recipient.parse::<Address>())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let envelope = Envelope::new(Some(sender), rcpts)?;

        let mut builder = SmtpTransport::builder_dangerous(&self.host).port(self.port);
        if let Some(credentials) = self.credentials.clone() {
            builder = builder.credentials(credentials);
        }
        let mailer = builder.build();

        debug!(
            host = %self.host,
            port = self.port,
            recipients = recipients.len(),
            bytes = message.len(),
            "submitting message"
        );
        mailer.send_raw(&envelope, message)?;

        Ok(())
    }
}

/// Sends `message` through the SMTP server at `server`.
///
/// The recipient list is flattened (To, then Cc, then Bcc) and the message
/// is serialized to wire bytes; both are handed to a [`SmtpRelay`].
///
/// # Errors
///
/// Returns an error if the server string is invalid or the transport
/// reports a failure.
pub fn send(server: &str, credentials: Option<Credentials>, message: &Message) -> Result<()> {
    let relay = SmtpRelay::open(server, credentials)?;
    send_with(&relay, message)
}

/// Sends `message` through any [`Transport`] implementation.
///
/// # Errors
///
/// Propagates the transport's error verbatim.
pub fn send_with<T: Transport>(transport: &T, message: &Message) -> Result<()> {
    transport.send(&message.from, &message.recipients(), &message.to_bytes())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every submission instead of touching the network.
    struct CaptureTransport {
        sent: RefCell<Vec<(String, Vec<String>, Vec<u8>)>>,
    }

    impl CaptureTransport {
        fn new() -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for CaptureTransport {
        fn send(&self, from: &str, recipients: &[&str], message: &[u8]) -> Result<()> {
            self.sent.borrow_mut().push((
                from.to_string(),
                recipients.iter().map(ToString::to_string).collect(),
                message.to_vec(),
            ));
            Ok(())
        }
    }

    #[test]
    fn test_send_with_forwards_flattened_recipients_and_bytes() {
        let mut message = mailcraft_mime::Message::new("Hi", "this is the body")
            .to("to@example.com")
            .cc("to@example.com")
            .cc("other@example.com")
            .bcc("hidden@example.com");
        message.from = "sender@example.com".to_string();
        message
            .attach_reader(&b"payload"[..], "data.bin", mailcraft_mime::Headers::new())
            .unwrap();

        let transport = CaptureTransport::new();
        send_with(&transport, &message).unwrap();

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);

        let (from, recipients, bytes) = &sent[0];
        assert_eq!(from, "sender@example.com");
        assert_eq!(
            recipients,
            &vec![
                "to@example.com".to_string(),
                "to@example.com".to_string(),
                "other@example.com".to_string(),
                "hidden@example.com".to_string(),
            ]
        );

        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.contains("Subject: Hi\r\n"));
        assert!(text.contains("Content-Type: multipart/mixed; boundary="));
        assert!(!text.contains("hidden@example.com"));
    }

    #[test]
    fn test_relay_parses_host_and_port() {
        let relay = SmtpRelay::open("smtp.example.com:587", None).unwrap();
        assert_eq!(relay.host, "smtp.example.com");
        assert_eq!(relay.port, 587);
    }

    #[test]
    fn test_relay_defaults_port() {
        let relay = SmtpRelay::open("smtp.example.com", None).unwrap();
        assert_eq!(relay.port, DEFAULT_SMTP_PORT);
    }

    #[test]
    fn test_relay_rejects_bad_port() {
        let result = SmtpRelay::open("smtp.example.com:mail", None);
        assert!(matches!(result, Err(TransportError::InvalidServer(_))));
    }

    #[test]
    fn test_relay_rejects_bad_sender_address() {
        let relay = SmtpRelay::open("localhost:2525", None).unwrap();
        let result = relay.send("not-an-address", &["to@example.com"], b"bytes");
        assert!(matches!(result, Err(TransportError::Address(_))));
    }
}
