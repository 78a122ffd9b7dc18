use m2a_api::BackendConfig;
use m2a_types::RequestDescriptor;
use m2a_util::redact_sensitive;
use serde_json::{Map, Value, json};

/// Describe the request an invocation would send, with credentials redacted.
pub fn dry_run_report(config: &BackendConfig, request: &RequestDescriptor) -> Value {
    let mut header_lines = vec![
        format!("authorization: Bearer {}", config.api_key),
        "accept: application/json".to_string(),
    ];
    if request.body.is_some() {
        header_lines.push("content-type: application/json".to_string());
    }

    let mut headers = Map::new();
    for line in header_lines {
        let redacted = redact_sensitive(&line);
        if let Some((name, value)) = redacted.split_once(':') {
            headers.insert(name.to_string(), Value::String(value.trim().to_string()));
        }
    }

    json!({
        "method": request.method,
        "url": request.url(&config.base_url),
        "headers": headers,
        "body": request.body,
    })
}

/// Parse the `--args` flag into an argument bag.
pub fn parse_arguments(raw: Option<&str>) -> anyhow::Result<Map<String, Value>> {
    let Some(raw) = raw else {
        return Ok(Map::new());
    };
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        other => anyhow::bail!("--args must be a JSON object, got {other}"),
    }
}
