//! Streamable HTTP transport for agent hosts that cannot spawn a child process.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use axum::Router;
use rmcp::transport::streamable_http_server::{StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::M2aMcpCore;

/// Path the MCP endpoint is mounted under.
pub const MCP_HTTP_PATH: &str = "/mcp";

/// Parse `raw` as a socket address, refusing anything but loopback.
///
/// The server carries the backend credentials, so it is never exposed
/// beyond the local machine.
pub fn loopback_address(raw: &str) -> Result<SocketAddr> {
    let address: SocketAddr = raw
        .parse()
        .with_context(|| format!("invalid MCP HTTP bind address '{raw}'"))?;
    if !address.ip().is_loopback() {
        bail!("MCP HTTP server must bind to a loopback address, got {address}");
    }
    Ok(address)
}

/// A running streamable HTTP endpoint.
///
/// Every MCP session gets its own clone of the core; clones share one dispatcher.
#[derive(Debug)]
pub struct HttpTransport {
    local_addr: SocketAddr,
    shutdown: CancellationToken,
    server: JoinHandle<std::io::Result<()>>,
}

impl HttpTransport {
    /// Bind `address` and start serving in the background.
    pub async fn bind(address: SocketAddr, core: M2aMcpCore) -> Result<Self> {
        if !address.ip().is_loopback() {
            bail!("MCP HTTP server must bind to a loopback address, got {address}");
        }
        let listener = TcpListener::bind(address)
            .await
            .with_context(|| format!("bind MCP HTTP listener on {address}"))?;
        let local_addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let tools = core.tools().len();

        let service = StreamableHttpService::new(
            move || Ok(core.clone()),
            Arc::new(LocalSessionManager::default()),
            StreamableHttpServerConfig {
                cancellation_token: shutdown.child_token(),
                ..Default::default()
            },
        );
        let router = Router::new().nest_service(MCP_HTTP_PATH, service);

        let stop = shutdown.clone();
        let server = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move { stop.cancelled().await })
                .await
        });

        info!(address = %local_addr, path = MCP_HTTP_PATH, tools, transport = "streamable-http", "starting MCP server");
        Ok(Self {
            local_addr,
            shutdown,
            server,
        })
    }

    /// Socket the listener actually bound; resolves port 0 to the assigned port.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting connections, close open sessions and wait for the server task.
    pub async fn shutdown(self) -> Result<()> {
        self.shutdown.cancel();
        self.server
            .await
            .context("MCP HTTP server task panicked")?
            .context("MCP HTTP server failed")?;
        info!(address = %self.local_addr, "MCP HTTP server stopped");
        Ok(())
    }
}
