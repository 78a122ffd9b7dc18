use anyhow::{Context, Result};
use rmcp::ServiceExt;
use tracing::info;

use crate::M2aMcpCore;

/// Serve MCP over stdin/stdout until the peer disconnects.
///
/// Stdout carries protocol frames only; diagnostics must go to stderr.
pub async fn serve_stdio(core: M2aMcpCore) -> Result<()> {
    info!(tools = core.tools().len(), transport = "stdio", "starting MCP server");
    let service = core
        .serve(rmcp::transport::stdio())
        .await
        .context("initialize MCP stdio session")?;
    let reason = service.waiting().await.context("MCP stdio session task failed")?;
    info!(?reason, "MCP stdio session ended");
    Ok(())
}
