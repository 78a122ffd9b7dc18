use std::time::{Duration, Instant};

use async_trait::async_trait;
use m2a_types::{HttpMethod, RequestDescriptor};
use reqwest::{Client, Method, header};
use tracing::{debug, warn};

use crate::{BackendConfig, ConfigError, GatewayError};

/// Upper bound on a single backend exchange.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Executes translated requests against the backend.
///
/// Returns the raw response body on a 2xx status.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn execute(&self, request: &RequestDescriptor) -> Result<Vec<u8>, GatewayError>;
}

/// Thin wrapper around a configured `reqwest::Client` for M2A API access.
///
/// Authorization and Accept headers are installed as client defaults, so
/// every request carries them. `Content-Type: application/json` is added only
/// when a body is present.
#[derive(Debug, Clone)]
pub struct M2aClient {
    base_url: String,
    http: Client,
}

impl M2aClient {
    pub fn new(config: &BackendConfig) -> Result<Self, ConfigError> {
        let mut default_headers = header::HeaderMap::new();
        let mut authorization = header::HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| ConfigError::InvalidApiKey)?;
        authorization.set_sensitive(true);
        default_headers.insert(header::AUTHORIZATION, authorization);
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|error| ConfigError::HttpClient(error.to_string()))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl Backend for M2aClient {
    async fn execute(&self, request: &RequestDescriptor) -> Result<Vec<u8>, GatewayError> {
        let url = request.url(&self.base_url);
        debug!(method = %request.method, %url, "building request");

        let mut builder = self.http.request(to_reqwest_method(request.method), &url);
        if let Some(body) = &request.body {
            let payload = serde_json::to_vec(body).map_err(|error| GatewayError::Encode(error.to_string()))?;
            builder = builder.header(header::CONTENT_TYPE, "application/json").body(payload);
        }

        let started = Instant::now();
        let response = builder.send().await.map_err(|error| {
            warn!(method = %request.method, path = %request.path, error = %error, "backend request failed");
            GatewayError::transport(error.to_string())
        })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|error| GatewayError::transport(format!("failed to read response: {error}")))?;
        let duration_ms = started.elapsed().as_millis() as u64;

        if !status.is_success() {
            warn!(
                method = %request.method,
                path = %request.path,
                status = status.as_u16(),
                duration_ms,
                "backend returned error status"
            );
            return Err(GatewayError::api(status.as_u16(), String::from_utf8_lossy(&bytes)));
        }

        debug!(
            method = %request.method,
            path = %request.path,
            status = status.as_u16(),
            duration_ms,
            bytes = bytes.len(),
            "backend request completed"
        );
        Ok(bytes.to_vec())
    }
}
