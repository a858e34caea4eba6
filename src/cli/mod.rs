//! Command line entry point: transport selection and startup.

pub mod error;

use std::net::{IpAddr, SocketAddr};

use axum::Router;
use clap::{Parser, ValueEnum};
use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{API_KEY_ENV, Config};
use crate::gateway::Gateway;
use crate::mcp::{RocketlaneServer, create_mcp_service};

use self::error::{CliError, CliResult};

/// How MCP clients reach the server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// JSON-RPC over stdin/stdout
    #[default]
    Stdio,
    /// Streamable HTTP at /mcp
    Http,
}

#[derive(Parser, Debug)]
#[command(name = "rocketlane-mcp")]
#[command(author, version, about = "Rocketlane MCP server", long_about = None)]
pub struct Cli {
    /// Transport to serve
    #[arg(long, value_enum, default_value_t = Transport::Stdio)]
    pub transport: Transport,

    /// Host address to bind to (http transport)
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on (http transport)
    #[arg(short, long, default_value = "8000")]
    pub port: u16,

    /// Override the Rocketlane API URL (default: ROCKETLANE_BASE_URL env or the public API)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds (default: ROCKETLANE_TIMEOUT_SECS env or 30)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    /// Resolve configuration: flags, then environment, then defaults
    pub fn config(&self) -> Config {
        Config::new(self.base_url.clone(), self.timeout_secs)
    }
}

/// Initialize tracing subscriber with env filter.
///
/// Writes to stderr; stdout belongs to the stdio transport.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rocketlane_mcp=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing();
    Ok(serve(cli).await?)
}

async fn serve(cli: Cli) -> CliResult<()> {
    let config = cli.config();
    if !config.has_api_key() {
        warn!("{} not set - API calls will fail", API_KEY_ENV);
    }
    info!(
        "Starting Rocketlane MCP server ({:?}, upstream {})",
        cli.transport, config.base_url
    );

    let gateway = Gateway::new(config)?;
    match cli.transport {
        Transport::Stdio => serve_stdio(gateway).await,
        Transport::Http => serve_http(gateway, SocketAddr::new(cli.host, cli.port)).await,
    }
}

async fn serve_stdio(gateway: Gateway) -> CliResult<()> {
    let service = RocketlaneServer::new(gateway)
        .serve(stdio())
        .await
        .map_err(|e| CliError::Mcp {
            message: e.to_string(),
        })?;

    service.waiting().await.map_err(|e| CliError::Mcp {
        message: e.to_string(),
    })?;
    Ok(())
}

async fn serve_http(gateway: Gateway, addr: SocketAddr) -> CliResult<()> {
    let ct = CancellationToken::new();
    let app = Router::new()
        .nest_service("/mcp", create_mcp_service(gateway, ct.child_token()))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| CliError::Bind { addr, source })?;
    info!("MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
            ct.cancel();
        })
        .await
        .map_err(CliError::Serve)
}
