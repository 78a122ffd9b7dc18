//! Shared type definitions for the M2A Media MCP server.
//!
//! These types describe the command catalog (what each tool is called, which
//! arguments it accepts and which backend endpoint it maps to), the request
//! produced for a single invocation, and the envelope handed back to the
//! protocol layer.

mod command;
mod envelope;
mod request;

pub use command::{CommandSpec, Domain, HttpMethod, ParamKind, ParamPlacement, ParameterSpec, ParseDomainError, ResponseShape};
pub use envelope::{DeletionAck, ResultEnvelope};
pub use request::RequestDescriptor;
