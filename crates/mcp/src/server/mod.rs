mod core;
mod http;
mod log_payload;
mod schemas;
mod stdio;

pub use core::M2aMcpCore;
pub use http::{HttpTransport, MCP_HTTP_PATH, loopback_address};
pub use schemas::{input_schema, tool_for_command};
pub use stdio::serve_stdio;
