//! Attachment model and MIME sub-part serialization.

use crate::encoding::encode_base64_mime;
use crate::header::Headers;

/// A file attached to a message.
///
/// Regular attachments are presented as detached files with a Base64-encoded
/// body; inline attachments carry their bytes unencoded as part of the
/// message flow.
#[derive(Debug, Clone)]
pub struct Attachment {
    /// Name the attachment is keyed and presented under.
    pub filename: String,
    /// Raw content, fully buffered in memory.
    pub data: Vec<u8>,
    /// Whether the content is presented inline rather than as a file.
    pub inline: bool,
    /// Caller-supplied part headers.
    ///
    /// Merged into the sub-part on serialization; the fixed headers
    /// (`Content-Type`, `Content-Transfer-Encoding`, `Content-Disposition`)
    /// always win on a name collision.
    pub headers: Headers,
}

impl Attachment {
    pub(crate) const fn new(filename: String, data: Vec<u8>, inline: bool, headers: Headers) -> Self {
        Self {
            filename,
            data,
            inline,
            headers,
        }
    }

    /// Serializes the attachment as a MIME sub-part: header lines sorted by
    /// name, a blank line, then the body.
    ///
    /// Inline attachments emit `message/rfc822` with the raw bytes; regular
    /// attachments emit `application/octet-stream` with the bytes
    /// Base64-encoded and wrapped at 76 columns.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut headers = self.headers.clone();

        if self.inline {
            headers.set("Content-Type", "message/rfc822");
            headers.set(
                "Content-Disposition",
                format!("inline; filename=\"{}\"", self.filename),
            );
        } else {
            headers.set("Content-Type", "application/octet-stream");
            headers.set("Content-Transfer-Encoding", "base64");
            headers.set(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", self.filename),
            );
        }

        let mut wire = headers.to_string();
        wire.push_str("\r\n");

        let mut buf = wire.into_bytes();
        if self.inline {
            buf.extend_from_slice(&self.data);
        } else {
            buf.extend_from_slice(encode_base64_mime(&self.data).as_bytes());
        }

        buf
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::encoding::decode_base64;

    fn part_body(wire: &[u8]) -> &[u8] {
        let text = std::str::from_utf8(wire).unwrap();
        let split = text.find("\r\n\r\n").unwrap();
        &wire[split + 4..]
    }

    #[test]
    fn test_regular_attachment_base64_round_trip() {
        let data = vec![0u8, 159, 146, 150, 255, 1, 2];
        let attachment = Attachment::new("blob.bin".into(), data.clone(), false, Headers::new());

        let wire = attachment.to_bytes();
        let text = String::from_utf8(wire.clone()).unwrap();
        assert!(text.contains("Content-Type: application/octet-stream\r\n"));
        assert!(text.contains("Content-Transfer-Encoding: base64\r\n"));
        assert!(text.contains("Content-Disposition: attachment; filename=\"blob.bin\"\r\n"));

        let body = std::str::from_utf8(part_body(&wire)).unwrap();
        assert_eq!(decode_base64(body).unwrap(), data);
    }

    #[test]
    fn test_inline_attachment_body_is_unencoded() {
        let data = b"raw inline bytes".to_vec();
        let attachment = Attachment::new("note.txt".into(), data.clone(), true, Headers::new());

        let wire = attachment.to_bytes();
        let text = String::from_utf8(wire.clone()).unwrap();
        assert!(text.contains("Content-Type: message/rfc822\r\n"));
        assert!(text.contains("Content-Disposition: inline; filename=\"note.txt\"\r\n"));
        assert!(!text.contains("Content-Transfer-Encoding"));

        assert_eq!(part_body(&wire), data.as_slice());
    }

    #[test]
    fn test_caller_headers_never_override_fixed_ones() {
        let mut headers = Headers::new();
        headers.set("Content-Type", "image/png");
        headers.set("X-Attachment-Id", "logo");

        let attachment = Attachment::new("logo.png".into(), vec![1, 2, 3], false, headers);
        let text = String::from_utf8(attachment.to_bytes()).unwrap();

        assert!(text.contains("Content-Type: application/octet-stream\r\n"));
        assert!(!text.contains("image/png"));
        assert!(text.contains("X-Attachment-Id: logo\r\n"));
    }

    #[test]
    fn test_headers_precede_blank_line_and_body() {
        let attachment = Attachment::new("a".into(), b"data".to_vec(), true, Headers::new());
        let text = String::from_utf8(attachment.to_bytes()).unwrap();

        let (head, body) = text.split_once("\r\n\r\n").unwrap();
        assert!(head.lines().all(|line| line.contains(": ")));
        assert_eq!(body, "data");
    }
}
