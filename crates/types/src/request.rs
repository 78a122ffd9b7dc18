use serde::Serialize;
use serde_json::{Map, Value};

use crate::HttpMethod;

/// A fully translated backend request for one invocation.
///
/// Built fresh per call and never reused. `path` already contains the
/// substituted identifier and the encoded query string; the gateway only
/// prefixes the configured base URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    /// Endpoint path including any query string (e.g., "/api/v1/vod/assets?limit=10")
    pub path: String,
    /// JSON body; only fields that were supplied and non-empty are present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Map<String, Value>>,
    /// Raw identifier substituted into the endpoint template, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl RequestDescriptor {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            resource_id: None,
        }
    }

    /// Absolute URL against the given base.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.path)
    }
}
