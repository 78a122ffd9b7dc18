use thiserror::Error;

/// Errors raised while resolving backend configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingVariable(&'static str),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("API key contains characters that are not valid in an HTTP header")]
    InvalidApiKey,

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Failure of a single backend exchange.
///
/// The display strings are caller-visible: the invocation engine prefixes
/// them with "failed to <action>: ".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a status outside 200..=299.
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("failed to marshal request body: {0}")]
    Encode(String),
}

impl GatewayError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// HTTP status of an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = GatewayError::api(404, r#"{"error":"not found"}"#);
        assert_eq!(error.to_string(), r#"API error (status 404): {"error":"not found"}"#);
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_transport_error_display() {
        let error = GatewayError::transport("connection refused");
        assert_eq!(error.to_string(), "request failed: connection refused");
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::MissingVariable("M2A_API_KEY");
        assert_eq!(error.to_string(), "M2A_API_KEY environment variable is required");
    }
}
