//! Rocketlane MCP server binary.
//!
//! Serves over stdio by default; `--transport http` serves Streamable HTTP.
//! Requires `ROCKETLANE_API_KEY` in the environment.

use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    rocketlane_mcp::cli::run().await
}
