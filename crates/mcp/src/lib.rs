//! Model Context Protocol (MCP) server for the M2A Media API.
//!
//! Every command in the catalog is advertised as one MCP tool whose input
//! schema is derived from the command's parameter declarations. Calls are
//! routed through the invocation engine and returned as text content.
//!
//! Two transports are provided: stdio (the default for agent hosts that spawn
//! the server as a child process) and streamable HTTP on a loopback address.

pub mod server;

pub use server::{HttpTransport, M2aMcpCore, MCP_HTTP_PATH, loopback_address, serve_stdio};

/// Name advertised in the MCP `initialize` handshake.
pub const SERVER_NAME: &str = "m2a-media-mcp";
