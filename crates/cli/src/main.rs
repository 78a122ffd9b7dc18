use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use m2a_api::{BackendConfig, M2aClient};
use m2a_engine::Dispatcher;
use m2a_mcp::{HttpTransport, M2aMcpCore, MCP_HTTP_PATH, loopback_address, serve_stdio};
use m2a_registry::{CommandRegistry, Domain};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod dry_run;

use dry_run::{dry_run_report, parse_arguments};

/// MCP server exposing the M2A Media cloud API as tools.
#[derive(Parser, Debug)]
#[command(name = "m2a-mcp", version, about)]
struct Cli {
    /// Override M2A_BASE_URL
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the MCP server (stdio unless --http is given)
    Serve {
        /// Serve streamable HTTP on a loopback address instead of stdio
        #[arg(long, value_name = "ADDR", num_args = 0..=1, default_missing_value = "127.0.0.1:0")]
        http: Option<String>,
    },
    /// Print the tool catalog as JSON
    Tools {
        /// Only list tools from one product area
        #[arg(long)]
        domain: Option<Domain>,
    },
    /// Invoke a single tool and print the result envelope
    Call {
        /// Tool name, e.g. list_sources
        tool: String,
        /// Arguments as a JSON object
        #[arg(long, value_name = "JSON")]
        args: Option<String>,
        /// Print the request that would be sent without contacting the backend
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();
    let registry = CommandRegistry::builtin().context("load command catalog")?;

    match cli.command.unwrap_or(Command::Serve { http: None }) {
        Command::Tools { domain } => {
            let commands: Vec<_> = match domain {
                Some(domain) => registry.by_domain(domain).collect(),
                None => registry.iter().collect(),
            };
            println!("{}", serde_json::to_string_pretty(&commands)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Serve { http } => {
            let dispatcher = build_dispatcher(registry, cli.base_url.as_deref())?;
            let core = M2aMcpCore::new(dispatcher);
            match http {
                Some(address) => serve_http(core, &address).await?,
                None => serve_stdio(core).await?,
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Call { tool, args, dry_run } => {
            let config = load_config(cli.base_url.as_deref())?;
            let arguments = parse_arguments(args.as_deref()).context("parse --args")?;
            let dispatcher = Dispatcher::new(registry, Arc::new(M2aClient::new(&config)?));

            if dry_run {
                let request = dispatcher.plan(&tool, &arguments)?;
                println!("{}", serde_json::to_string_pretty(&dry_run_report(&config, &request))?);
                return Ok(ExitCode::SUCCESS);
            }

            let envelope = dispatcher.invoke_by_name(&tool, &arguments).await?;
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            Ok(if envelope.is_error() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
        }
    }
}

/// Logs go to stderr; stdout is reserved for protocol frames and command output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(base_url: Option<&str>) -> Result<BackendConfig> {
    let config = BackendConfig::from_env().context("load M2A configuration")?;
    let config = match base_url {
        Some(base_url) => config.with_base_url(base_url).context("apply --base-url")?,
        None => config,
    };
    info!(base_url = %config.base_url, aws_account_id = %config.aws_account_id, "configuration loaded");
    Ok(config)
}

fn build_dispatcher(registry: &'static CommandRegistry, base_url: Option<&str>) -> Result<Dispatcher> {
    let config = load_config(base_url)?;
    let client = M2aClient::new(&config).context("build M2A API client")?;
    Ok(Dispatcher::new(registry, Arc::new(client)))
}

async fn serve_http(core: M2aMcpCore, address: &str) -> Result<()> {
    let transport = HttpTransport::bind(loopback_address(address)?, core).await?;
    eprintln!("MCP HTTP server listening on http://{}{MCP_HTTP_PATH}", transport.local_addr());

    tokio::signal::ctrl_c().await.context("wait for shutdown signal")?;
    info!("shutting down MCP HTTP server");
    transport.shutdown().await
}
