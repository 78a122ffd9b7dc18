use std::{env, fmt};

use url::Url;

use crate::ConfigError;

pub const API_KEY_ENV: &str = "M2A_API_KEY";
pub const BASE_URL_ENV: &str = "M2A_BASE_URL";
pub const AWS_ACCOUNT_ID_ENV: &str = "M2A_AWS_ACCOUNT_ID";
pub const DEFAULT_BASE_URL: &str = "https://cloud.m2amedia.tv";

/// Credentials and endpoint for the M2A backend.
///
/// Read once at startup and immutable afterwards. `Debug` never prints the
/// API key.
#[derive(Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub api_key: String,
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Carried for parity with the platform's account model; no request uses it.
    pub aws_account_id: String,
}

impl BackendConfig {
    /// Resolve configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset. `M2A_API_KEY` is checked before
    /// `M2A_AWS_ACCOUNT_ID`, so a missing key is reported first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|value| value.trim().to_string()).filter(|value| !value.is_empty());

        let api_key = read(API_KEY_ENV).ok_or(ConfigError::MissingVariable(API_KEY_ENV))?;
        let base_url = read(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let aws_account_id = read(AWS_ACCOUNT_ID_ENV).ok_or(ConfigError::MissingVariable(AWS_ACCOUNT_ID_ENV))?;

        Self {
            api_key,
            base_url: String::new(),
            aws_account_id,
        }
        .with_base_url(&base_url)
    }

    /// Replace the base URL, validating and normalizing it.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        validate_base_url(base_url)?;
        self.base_url = base_url.trim().trim_end_matches('/').to_string();
        Ok(self)
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("aws_account_id", &self.aws_account_id)
            .finish()
    }
}

/// Validate that a base URL is absolute http(s) with a host.
pub fn validate_base_url(base: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: base.to_string(),
        reason,
    };

    let parsed = Url::parse(base.trim()).map_err(|error| invalid(error.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("must not carry a query or fragment".to_string()));
    }

    Ok(())
}
