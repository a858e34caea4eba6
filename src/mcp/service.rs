//! MCP Streamable HTTP service creation
//!
//! Builds the service that the `http` transport nests into an Axum router.

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::gateway::Gateway;

use super::server::RocketlaneServer;

/// Create MCP Streamable HTTP service
///
/// Every session gets its own [`RocketlaneServer`], all sharing the same
/// gateway and therefore the same HTTP connection pool.
///
/// # Example
/// ```no_run
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// # use rocketlane_mcp::config::Config;
/// # use rocketlane_mcp::gateway::Gateway;
/// # use rocketlane_mcp::mcp::create_mcp_service;
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let gateway = Gateway::new(Config::from_env())?;
/// let ct = CancellationToken::new();
///
/// let app: Router = Router::new().nest_service("/mcp", create_mcp_service(gateway, ct));
/// # Ok(())
/// # }
/// ```
pub fn create_mcp_service(
    gateway: Gateway,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<RocketlaneServer, LocalSessionManager> {
    // rmcp expects the factory to return io::Error
    let service_factory = move || -> Result<RocketlaneServer, std::io::Error> {
        Ok(RocketlaneServer::new(gateway.clone()))
    };

    let config = StreamableHttpServerConfig::default()
        .with_stateful_mode(true)
        .with_cancellation_token(cancellation_token);

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
