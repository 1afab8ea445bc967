//! Base64 encoding and decoding for attachment bodies.

use crate::error::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Maximum line length for encoded part bodies (RFC 2045).
const MAX_LINE_LENGTH: usize = 76;

/// Encodes data as Base64 (standard alphabet, padded).
#[must_use]
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decodes Base64 data.
///
/// Whitespace, including the line breaks inserted by
/// [`encode_base64_mime`], is stripped for lenient parsing.
///
/// # Errors
///
/// Returns an error if the input is not valid Base64.
pub fn decode_base64(data: &str) -> Result<Vec<u8>> {
    let cleaned: String = data.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD.decode(cleaned).map_err(Into::into)
}

/// Encodes data as Base64 wrapped at 76 columns with CRLF line breaks,
/// suitable for a MIME part body.
#[must_use]
pub fn encode_base64_mime(data: &[u8]) -> String {
    let encoded = encode_base64(data);
    let mut result = String::with_capacity(encoded.len() + (encoded.len() / MAX_LINE_LENGTH + 1) * 2);

    for (i, ch) in encoded.chars().enumerate() {
        if i > 0 && i % MAX_LINE_LENGTH == 0 {
            result.push_str("\r\n");
        }
        result.push(ch);
    }

    result
}
