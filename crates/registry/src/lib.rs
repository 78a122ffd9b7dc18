//! Command catalog for the M2A Media MCP server.
//!
//! The catalog is the single source of truth for every tool: the protocol
//! layer derives advertised schemas from it and the invocation engine reads
//! endpoint templates and parameter placement from it.

mod catalog;
mod error;
pub mod models;

pub use catalog::builtin_commands;
pub use error::RegistryError;
pub use m2a_types::{CommandSpec, Domain};
pub use models::CommandRegistry;
