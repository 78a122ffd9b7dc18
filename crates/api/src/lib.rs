//! M2A Media API gateway.
//!
//! This crate owns everything that talks to the M2A REST backend:
//!
//! - [`BackendConfig`] resolves credentials and the base URL from the environment
//! - [`M2aClient`] executes a [`RequestDescriptor`](m2a_types::RequestDescriptor)
//!   with bearer authentication and JSON headers
//! - [`Backend`] is the seam the invocation engine depends on, so tests can
//!   substitute a recording implementation
//!
//! # Example
//!
//! ```ignore
//! use m2a_api::{Backend, BackendConfig, M2aClient};
//! use m2a_types::{HttpMethod, RequestDescriptor};
//!
//! let config = BackendConfig::from_env()?;
//! let client = M2aClient::new(&config)?;
//! let bytes = client
//!     .execute(&RequestDescriptor::new(HttpMethod::Get, "/api/v2/connect/sources"))
//!     .await?;
//! ```

mod client;
mod config;
mod error;

pub use client::{Backend, M2aClient, REQUEST_TIMEOUT};
pub use config::{
    API_KEY_ENV, AWS_ACCOUNT_ID_ENV, BASE_URL_ENV, BackendConfig, DEFAULT_BASE_URL, validate_base_url,
};
pub use error::{ConfigError, GatewayError};
