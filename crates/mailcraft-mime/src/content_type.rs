//! Message body content types.

use std::fmt;

/// Content type of the message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    /// Plain text body.
    #[default]
    TextPlain,
    /// HTML body.
    TextHtml,
}

impl ContentType {
    /// Returns the MIME type string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TextPlain => "text/plain",
            Self::TextHtml => "text/html",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_display() {
        assert_eq!(ContentType::TextPlain.to_string(), "text/plain");
        assert_eq!(ContentType::TextHtml.to_string(), "text/html");
    }

    #[test]
    fn test_content_type_default_is_plain() {
        assert_eq!(ContentType::default(), ContentType::TextPlain);
    }
}
