use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use m2a_api::{Backend, GatewayError};
use m2a_engine::{Dispatcher, InvocationError};
use m2a_registry::CommandRegistry;
use m2a_types::{HttpMethod, ParamKind, RequestDescriptor, ResultEnvelope};
use serde_json::{Map, Value, json};

/// In-memory backend recording every request it receives.
struct RecordingBackend {
    requests: Mutex<Vec<RequestDescriptor>>,
    reply: Result<Vec<u8>, GatewayError>,
}

impl RecordingBackend {
    fn replying(reply: Result<Vec<u8>, GatewayError>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply,
        })
    }

    fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl Backend for RecordingBackend {
    async fn execute(&self, request: &RequestDescriptor) -> Result<Vec<u8>, GatewayError> {
        self.requests.lock().expect("requests lock").push(request.clone());
        self.reply.clone()
    }
}

fn dispatcher(backend: Arc<RecordingBackend>) -> Dispatcher {
    Dispatcher::new(CommandRegistry::builtin().expect("builtin catalog"), backend)
}

fn args(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[tokio::test]
async fn validation_failures_never_reach_the_backend() {
    let backend = RecordingBackend::replying(Ok(b"{}".to_vec()));
    let dispatcher = dispatcher(backend.clone());

    for command in dispatcher.registry().iter() {
        let complete: Map<String, Value> = command
            .required_parameters()
            .map(|parameter| {
                let value = match parameter.kind {
                    ParamKind::String => json!("x"),
                    ParamKind::Number => json!(1),
                };
                (parameter.name.to_string(), value)
            })
            .collect();

        for required in command.required_parameters() {
            let mut absent = complete.clone();
            absent.remove(required.name);
            let mut empty = complete.clone();
            empty.insert(required.name.to_string(), json!(""));
            let mut wrong_kind = complete.clone();
            wrong_kind.insert(required.name.to_string(), json!(true));

            for bag in [absent, empty, wrong_kind] {
                let envelope = dispatcher.invoke(command, &bag).await;
                assert_eq!(
                    envelope,
                    ResultEnvelope::Error(format!("{} is required", required.name)),
                    "{} accepted {bag:?}",
                    command.name
                );
            }
        }
    }

    let envelope = dispatcher
        .invoke_by_name("update_source", &args(json!({ "source_id": "s1" })))
        .await
        .expect("known tool");
    assert_eq!(envelope, ResultEnvelope::Error("at least one field to update is required".into()));

    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn successful_get_passes_body_through() {
    let backend = RecordingBackend::replying(Ok(br#"{"id":"abc"}"#.to_vec()));
    let dispatcher = dispatcher(backend.clone());

    let envelope = dispatcher
        .invoke_by_name("get_source", &args(json!({ "source_id": "abc" })))
        .await
        .expect("known tool");

    let payload: Value = serde_json::from_str(envelope.text()).expect("json payload");
    assert_eq!(payload, json!({ "id": "abc" }));

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert_eq!(requests[0].path, "/api/v2/connect/sources/abc");
}

#[tokio::test]
async fn api_error_is_prefixed_with_operation() {
    let backend = RecordingBackend::replying(Err(GatewayError::api(404, r#"{"msg":"not found"}"#)));
    let dispatcher = dispatcher(backend);

    let envelope = dispatcher
        .invoke_by_name("list_sources", &Map::new())
        .await
        .expect("known tool");
    assert_eq!(
        envelope,
        ResultEnvelope::Error(r#"failed to list sources: API error (status 404): {"msg":"not found"}"#.into())
    );
}

#[tokio::test]
async fn delete_synthesizes_acknowledgement() {
    let backend = RecordingBackend::replying(Ok(br#"{"deleted":"yes","extra":1}"#.to_vec()));
    let dispatcher = dispatcher(backend.clone());

    let envelope = dispatcher
        .invoke_by_name("delete_vod_asset", &args(json!({ "asset_id": "asset-7" })))
        .await
        .expect("known tool");
    assert_eq!(
        envelope,
        ResultEnvelope::Success(r#"{"success":true,"message":"VOD asset asset-7 deleted successfully"}"#.into())
    );

    let requests = backend.requests();
    assert_eq!(requests[0].method, HttpMethod::Delete);
    assert_eq!(requests[0].path, "/api/v1/vod/assets/asset-7");
    assert_eq!(requests[0].body, None);
}

#[tokio::test]
async fn create_source_sends_only_supplied_fields() {
    let backend = RecordingBackend::replying(Ok(br#"{"id":"new"}"#.to_vec()));
    let dispatcher = dispatcher(backend.clone());

    dispatcher
        .invoke_by_name(
            "create_source",
            &args(json!({ "name": "cam1", "type": "rtmp", "url": "rtmp://x" })),
        )
        .await
        .expect("known tool");

    let request = &backend.requests()[0];
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.path, "/api/v2/connect/sources");
    let body = request.body.clone().map(Value::Object).expect("body");
    assert_eq!(body, json!({ "name": "cam1", "type": "rtmp", "url": "rtmp://x" }));
    assert!(body.get("description").is_none());
}

#[tokio::test]
async fn unknown_tool_is_an_error_not_an_envelope() {
    let backend = RecordingBackend::replying(Ok(Vec::new()));
    let dispatcher = dispatcher(backend.clone());

    let error = dispatcher
        .invoke_by_name("launch_rocket", &Map::new())
        .await
        .expect_err("unknown tool");
    assert_eq!(error, InvocationError::UnknownCommand("launch_rocket".into()));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn plan_builds_the_request_without_executing() {
    let backend = RecordingBackend::replying(Ok(Vec::new()));
    let dispatcher = dispatcher(backend.clone());

    let request = dispatcher
        .plan("list_channels", &args(json!({ "state": "RUNNING" })))
        .expect("plan");
    assert_eq!(request.path, "/api/v3/live/channels?state=RUNNING");
    assert!(backend.requests().is_empty());
}
