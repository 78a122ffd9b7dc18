use serde::Serialize;

/// Caller-facing outcome of a single invocation.
///
/// Carries no structured error code; the message text is the whole contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultEnvelope {
    /// Backend response text (or a synthesized acknowledgement), passed through unparsed.
    Success(String),
    /// Human-readable failure message.
    Error(String),
}

impl ResultEnvelope {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The payload or message text.
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }
}

/// Payload returned for delete-style commands in place of the backend body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionAck {
    pub success: bool,
    pub message: String,
}

impl DeletionAck {
    pub fn new(resource: &str, identifier: &str) -> Self {
        Self {
            success: true,
            message: format!("{resource} {identifier} deleted successfully"),
        }
    }
}
