use std::sync::Arc;
use std::time::Instant;

use m2a_api::Backend;
use m2a_registry::CommandRegistry;
use m2a_types::{CommandSpec, RequestDescriptor, ResultEnvelope};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{InvocationError, format_error, format_outcome, translate};

/// Runs tool invocations end to end: translate, execute, format.
///
/// Holds no per-call state, so one instance serves concurrent invocations.
#[derive(Clone)]
pub struct Dispatcher {
    registry: &'static CommandRegistry,
    backend: Arc<dyn Backend>,
}

impl Dispatcher {
    pub fn new(registry: &'static CommandRegistry, backend: Arc<dyn Backend>) -> Self {
        Self { registry, backend }
    }

    pub fn registry(&self) -> &'static CommandRegistry {
        self.registry
    }

    /// Look up a command by tool name.
    pub fn command(&self, name: &str) -> Result<&'static CommandSpec, InvocationError> {
        self.registry
            .get(name)
            .ok_or_else(|| InvocationError::UnknownCommand(name.to_string()))
    }

    /// Translate without executing; used for dry runs.
    pub fn plan(&self, name: &str, arguments: &Map<String, Value>) -> Result<RequestDescriptor, InvocationError> {
        translate(self.command(name)?, arguments)
    }

    /// Invoke a tool by name. Only an unknown name is returned as `Err`.
    pub async fn invoke_by_name(&self, name: &str, arguments: &Map<String, Value>) -> Result<ResultEnvelope, InvocationError> {
        let command = self.command(name)?;
        Ok(self.invoke(command, arguments).await)
    }

    /// Invoke `command`. Never fails: every problem becomes an error envelope.
    pub async fn invoke(&self, command: &CommandSpec, arguments: &Map<String, Value>) -> ResultEnvelope {
        let request = match translate(command, arguments) {
            Ok(request) => request,
            Err(error) => {
                debug!(tool = command.name, error = %error, "rejected invocation");
                return format_error(&error);
            }
        };

        debug!(tool = command.name, method = %request.method, path = %request.path, "dispatching invocation");
        let started = Instant::now();
        let outcome = self.backend.execute(&request).await;
        let duration_ms = started.elapsed().as_millis() as u64;

        if let Err(error) = &outcome {
            warn!(tool = command.name, duration_ms, error = %error, "invocation failed");
        } else {
            debug!(tool = command.name, duration_ms, "invocation succeeded");
        }

        format_outcome(command, &request, outcome)
    }
}
