use m2a_api::GatewayError;
use thiserror::Error;

/// Per-invocation failure.
///
/// None of these are fatal to the process; each becomes an error envelope
/// for the caller that triggered it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvocationError {
    /// A required argument was absent, empty, or of the wrong kind.
    #[error("{0} is required")]
    MissingArgument(&'static str),

    /// An update-style command received none of its optional fields.
    #[error("{0}")]
    NoFieldsToUpdate(&'static str),

    #[error("unknown tool: {0}")]
    UnknownCommand(String),

    /// The backend exchange failed; `action` names the attempted operation.
    #[error("failed to {action}: {source}")]
    Gateway {
        action: &'static str,
        #[source]
        source: GatewayError,
    },
}

impl InvocationError {
    pub fn gateway(action: &'static str, source: GatewayError) -> Self {
        Self::Gateway { action, source }
    }

    /// Whether the failure happened before any backend call was attempted.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingArgument(_) | Self::NoFieldsToUpdate(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_is_prefixed_with_action() {
        let error = InvocationError::gateway("list sources", GatewayError::api(404, r#"{"msg":"not found"}"#));
        assert_eq!(
            error.to_string(),
            r#"failed to list sources: API error (status 404): {"msg":"not found"}"#
        );
        assert!(!error.is_validation());
    }

    #[test]
    fn test_validation_errors_are_bare() {
        assert_eq!(InvocationError::MissingArgument("source_id").to_string(), "source_id is required");
        let guard = InvocationError::NoFieldsToUpdate("at least one metadata field is required");
        assert_eq!(guard.to_string(), "at least one metadata field is required");
        assert!(guard.is_validation());
    }
}
