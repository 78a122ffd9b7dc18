use m2a_api::GatewayError;
use m2a_types::{CommandSpec, DeletionAck, RequestDescriptor, ResponseShape, ResultEnvelope};

use crate::InvocationError;

/// Wrap the gateway outcome for `command` into the caller-facing envelope.
///
/// Success bodies pass through unparsed. Deletion commands replace the
/// backend body with a synthesized acknowledgement naming the resource.
pub fn format_outcome(
    command: &CommandSpec,
    request: &RequestDescriptor,
    outcome: Result<Vec<u8>, GatewayError>,
) -> ResultEnvelope {
    let bytes = match outcome {
        Ok(bytes) => bytes,
        Err(error) => return format_error(&InvocationError::gateway(command.action, error)),
    };

    match command.response {
        ResponseShape::Passthrough => ResultEnvelope::Success(String::from_utf8_lossy(&bytes).into_owned()),
        ResponseShape::DeletionAck { resource } => {
            let identifier = request.resource_id.as_deref().unwrap_or_default();
            match serde_json::to_string(&DeletionAck::new(resource, identifier)) {
                Ok(payload) => ResultEnvelope::Success(payload),
                Err(error) => ResultEnvelope::Error(format!("failed to encode deletion acknowledgement: {error}")),
            }
        }
    }
}

/// Render an invocation failure as an error envelope.
pub fn format_error(error: &InvocationError) -> ResultEnvelope {
    ResultEnvelope::Error(error.to_string())
}

#[cfg(test)]
mod tests {
    use m2a_registry::CommandRegistry;
    use m2a_types::HttpMethod;

    use super::*;

    fn command(name: &str) -> &'static CommandSpec {
        CommandRegistry::builtin()
            .expect("builtin catalog")
            .get(name)
            .expect("command exists")
    }

    #[test]
    fn passthrough_keeps_bytes() {
        let request = RequestDescriptor::new(HttpMethod::Get, "/api/v2/connect/sources/abc");
        let envelope = format_outcome(command("get_source"), &request, Ok(br#"{"id":"abc"}"#.to_vec()));
        assert_eq!(envelope, ResultEnvelope::Success(r#"{"id":"abc"}"#.to_string()));
    }

    #[test]
    fn passthrough_replaces_invalid_utf8() {
        let request = RequestDescriptor::new(HttpMethod::Get, "/api/v2/connect/sources/abc");
        let envelope = format_outcome(command("get_source"), &request, Ok(b"{\"n\":\"\xff\"}".to_vec()));
        assert_eq!(envelope, ResultEnvelope::Success("{\"n\":\"\u{FFFD}\"}".to_string()));
    }

    #[test]
    fn deletion_ignores_backend_body() {
        let mut request = RequestDescriptor::new(HttpMethod::Delete, "/api/v3/live/channels/ch-9");
        request.resource_id = Some("ch-9".into());
        let envelope = format_outcome(command("delete_channel"), &request, Ok(b"ignored".to_vec()));
        assert_eq!(
            envelope.text(),
            r#"{"success":true,"message":"Channel ch-9 deleted successfully"}"#
        );
    }

    #[test]
    fn gateway_failure_names_the_operation() {
        let request = RequestDescriptor::new(HttpMethod::Get, "/api/v1/vod/assets");
        let envelope = format_outcome(
            command("list_vod_assets"),
            &request,
            Err(GatewayError::transport("operation timed out")),
        );
        assert_eq!(
            envelope,
            ResultEnvelope::Error("failed to list VOD assets: request failed: operation timed out".into())
        );
    }
}
