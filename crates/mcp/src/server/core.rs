use std::sync::Arc;

use m2a_api::GatewayError;
use m2a_engine::{Dispatcher, InvocationError, format_error};
use m2a_registry::Domain;
use m2a_types::ResultEnvelope;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, ErrorData, Implementation, ListToolsResult, PaginatedRequestParams,
    ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::{RoleServer, ServerHandler, service::RequestContext};
use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::SERVER_NAME;
use crate::server::log_payload::build_log_payload;
use crate::server::schemas::tool_for_command;

/// MCP handler exposing every catalog command as a tool.
///
/// Cheap to clone; the HTTP transport builds one per session from a shared
/// dispatcher and tool list.
#[derive(Clone)]
pub struct M2aMcpCore {
    dispatcher: Dispatcher,
    tools: Arc<Vec<Tool>>,
}

impl M2aMcpCore {
    /// Create a handler advertising the dispatcher's catalog.
    pub fn new(dispatcher: Dispatcher) -> Self {
        let tools = dispatcher.registry().iter().map(tool_for_command).collect();
        Self {
            dispatcher,
            tools: Arc::new(tools),
        }
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Route one tool call through the dispatcher, racing it against `cancellation`.
    ///
    /// An unknown tool name is a protocol error. Everything else becomes a tool
    /// result, flagged as an error for failure envelopes.
    pub async fn call(
        &self,
        name: &str,
        arguments: Option<Map<String, Value>>,
        cancellation: CancellationToken,
    ) -> Result<CallToolResult, ErrorData> {
        let command = self
            .dispatcher
            .command(name)
            .map_err(|error| ErrorData::invalid_params(error.to_string(), None))?;
        let arguments = arguments.unwrap_or_default();

        let envelope = tokio::select! {
            envelope = self.dispatcher.invoke(command, &arguments) => envelope,
            _ = cancellation.cancelled() => {
                debug!(tool = name, "tool call cancelled");
                format_error(&InvocationError::gateway(command.action, GatewayError::transport("request cancelled")))
            }
        };

        debug!(
            tool = name,
            is_error = envelope.is_error(),
            payload = %build_log_payload(name, &arguments, &envelope),
            "tool call completed"
        );
        Ok(to_call_result(envelope))
    }
}

fn to_call_result(envelope: ResultEnvelope) -> CallToolResult {
    match envelope {
        ResultEnvelope::Success(text) => CallToolResult::success(vec![Content::text(text)]),
        ResultEnvelope::Error(message) => CallToolResult::error(vec![Content::text(message)]),
    }
}

fn server_instructions() -> String {
    let domains = Domain::ALL.iter().map(Domain::title).collect::<Vec<_>>().join(", ");
    format!(
        "Tools for the M2A Media cloud API ({domains}). Read-only tools are GET requests; \
         delete_* tools are destructive. Results are the backend's JSON responses passed through unchanged; \
         failures are returned as error results with a message naming the attempted operation."
    )
}

impl ServerHandler for M2aMcpCore {
    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, ErrorData>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult::with_all_items(self.tools.as_ref().clone())))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, ErrorData>> + Send + '_ {
        async move { self.call(&request.name, request.arguments, context.ct).await }
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            protocol_version: ProtocolVersion::LATEST,
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("M2A Media MCP".to_string()),
                ..Default::default()
            },
            instructions: Some(server_instructions()),
        }
    }
}
