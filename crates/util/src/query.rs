//! Query-string assembly for backend requests.

use std::fmt;

use crate::encode_component;

/// Ordered query-string builder.
///
/// Pairs are rendered in insertion order; the first is prefixed with `?` and
/// the rest with `&`. Values are percent-encoded, keys are emitted verbatim
/// since they come from the command catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Append the rendered query string to `path`.
    pub fn append_to(&self, path: &str) -> String {
        format!("{path}{self}")
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.pairs.iter().enumerate() {
            let separator = if index == 0 { '?' } else { '&' };
            write!(f, "{separator}{key}={}", encode_component(value))?;
        }
        Ok(())
    }
}
