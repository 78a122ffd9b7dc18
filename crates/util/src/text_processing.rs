//! # Text Processing Utilities
//!
//! Redaction of credential-looking values before they reach logs or
//! terminal output, plus small helpers for summarizing long messages.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Redacts values that look like secrets in a string.
///
/// Authorization headers, bearer tokens and `KEY=value` style assignments
/// whose key names a credential are replaced with `[REDACTED]` while the key
/// or header name is preserved.
///
/// # Example
/// ```rust
/// use m2a_util::redact_sensitive;
///
/// let redacted = redact_sensitive("M2A_API_KEY=abc123 TOKEN=xyz789");
/// assert_eq!(redacted, "M2A_API_KEY=[REDACTED] TOKEN=[REDACTED]");
///
/// let redacted = redact_sensitive("Bearer secret123");
/// assert_eq!(redacted, "Bearer [REDACTED]");
/// ```
pub fn redact_sensitive(input: &str) -> String {
    redact_sensitive_with(input, "[REDACTED]")
}

/// Redacts sensitive-looking values, using a custom replacement token.
pub fn redact_sensitive_with(input: &str, replacement: &str) -> String {
    let mut redacted = input.to_string();

    for pattern in get_redact_patterns().iter() {
        redacted = pattern
            .replace_all(&redacted, |captures: &regex::Captures| {
                let prefix = captures.get(1).map(|m| m.as_str()).unwrap_or("");
                format!("{prefix}{replacement}")
            })
            .to_string();
    }

    redacted
}

/// Returns compiled regex patterns for detecting sensitive information.
///
/// Ordered from most specific to most general. Each pattern captures the
/// part to keep in group 1 and the secret in group 2.
pub fn get_redact_patterns() -> &'static Vec<Regex> {
    static REDACT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(build_redact_patterns);

    &REDACT_PATTERNS
}

fn build_redact_patterns() -> Vec<Regex> {
    [
        r"(?i)(authorization:\s+)([^\s]+(?:\s+[^\s]+)*)",
        r"(?i)((?:^|\b)Bearer\s+)([A-Za-z0-9\-._~+/]+=*)",
        r"(?i)([A-Z0-9_]*?(?:KEY|TOKEN|SECRET|PASSWORD)=)([^\s]+)",
        r"(?i)((?:api[\s_-]?key|auth[\s_-]?token|secret|password)\s*:\s*)([^\s,;]+)",
    ]
    .into_iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
}

/// Recursively redacts string values inside a JSON document.
pub fn redact_json(value: &Value) -> Value {
    match value {
        Value::String(text) => Value::String(redact_sensitive(text)),
        Value::Array(items) => Value::Array(items.iter().map(redact_json).collect()),
        Value::Object(map) => Value::Object(map.iter().map(|(key, item)| (key.clone(), redact_json(item))).collect()),
        other => other.clone(),
    }
}

/// Trims and shortens `text` to at most `max_len` characters, ending in `...` when cut.
pub fn truncate_for_summary(text: &str, max_len: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_len {
        return trimmed.to_string();
    }

    // Reserve space for the trailing ellipsis.
    let target_len = max_len.saturating_sub(3);
    let truncated: String = trimmed.chars().take(target_len).collect();
    format!("{}...", truncated.trim_end())
}
