//! Helpers for building tool-call log payloads.
//!
//! Payloads are redacted and size-bounded so they can be attached to
//! `tracing` events without leaking credentials or flooding the log.

use m2a_types::ResultEnvelope;
use m2a_util::{redact_json, truncate_for_summary};
use serde_json::{Map, Value};

const MAX_LOGGED_RESULT_CHARS: usize = 512;

/// Builds the payload logged for one tool call.
///
/// Includes the tool name, the redacted arguments, and the envelope kind
/// with its text shortened for summaries.
pub(crate) fn build_log_payload(tool: &str, arguments: &Map<String, Value>, envelope: &ResultEnvelope) -> Value {
    let outcome = if envelope.is_error() { "error" } else { "success" };
    let mut payload = Map::new();
    payload.insert("tool".into(), Value::String(tool.to_string()));
    payload.insert("request".into(), redact_json(&Value::Object(arguments.clone())));
    payload.insert(
        outcome.into(),
        Value::String(truncate_for_summary(envelope.text(), MAX_LOGGED_RESULT_CHARS)),
    );
    Value::Object(payload)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn payload_redacts_arguments_and_truncates_result() {
        let arguments = match json!({ "url": "rtmp://host/live?token=abc", "note": "Bearer secret" }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let envelope = ResultEnvelope::Success("x".repeat(2000));
        let payload = build_log_payload("create_source", &arguments, &envelope);

        assert_eq!(payload["tool"], "create_source");
        assert_eq!(payload["request"]["note"], "Bearer [REDACTED]");
        assert_eq!(payload["request"]["url"], "rtmp://host/live?token=[REDACTED]");
        let logged = payload["success"].as_str().expect("success text");
        assert_eq!(logged.chars().count(), MAX_LOGGED_RESULT_CHARS);
        assert!(logged.ends_with("..."));
    }

    #[test]
    fn payload_marks_error_outcomes() {
        let envelope = ResultEnvelope::Error("source_id is required".into());
        let payload = build_log_payload("get_source", &Map::new(), &envelope);
        assert_eq!(payload["error"], "source_id is required");
        assert!(payload.get("success").is_none());
    }
}
