//! MIME part header handling.

use std::collections::HashMap;
use std::fmt;

/// Collection of MIME part headers.
///
/// Header names are case-insensitive and single-valued; setting an existing
/// name replaces its value. Wire emission is sorted by name so serialized
/// output is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Headers {
    headers: HashMap<String, String>,
}

impl Headers {
    /// Creates a new empty header collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header value, replacing any existing value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into().to_lowercase(), value.into());
    }

    /// Gets the value for a header.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Removes a header.
    pub fn remove(&mut self, name: &str) {
        self.headers.remove(&name.to_lowercase());
    }

    /// Returns true if no headers are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Number of headers set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns the headers sorted by name.
    pub fn iter_sorted(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut pairs: Vec<_> = self
            .headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        pairs.sort_unstable_by_key(|&(name, _)| name);
        pairs.into_iter()
    }
}

/// Capitalizes a header name (e.g., "content-type" -> "Content-Type").
fn capitalize(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join("-")
}

impl fmt::Display for Headers {
    /// Emits `Key: Value` lines with CRLF line endings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter_sorted() {
            writeln!(f, "{}: {value}\r", capitalize(name))?;
        }

        Ok(())
    }
}
