use std::net::SocketAddr;

use miette::Diagnostic;
use thiserror::Error;

use crate::gateway::GatewayInitError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Failed to build the Rocketlane HTTP client")]
    #[diagnostic(code(rocketlane_mcp::cli::client))]
    Client(#[from] GatewayInitError),

    #[error("Failed to bind {addr}")]
    #[diagnostic(
        code(rocketlane_mcp::cli::bind),
        help("Is another process using this port? Try a different --port.")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server error: {0}")]
    #[diagnostic(code(rocketlane_mcp::cli::serve))]
    Serve(#[source] std::io::Error),

    #[error("MCP session failed: {message}")]
    #[diagnostic(code(rocketlane_mcp::cli::mcp))]
    Mcp { message: String },
}

pub type CliResult<T> = Result<T, CliError>;
