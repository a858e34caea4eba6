//! MCP server implementation
//!
//! One server type carries every tool. Each entity module contributes its own
//! tool router; they are merged here.

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{ServerCapabilities, ServerInfo},
    tool_handler,
};

use crate::gateway::Gateway;

/// Rocketlane MCP server
///
/// Cheap to clone: the gateway shares one HTTP connection pool and the
/// configuration is read-only.
#[derive(Clone)]
pub struct RocketlaneServer {
    gateway: Gateway,
    tool_router: ToolRouter<Self>,
}

impl RocketlaneServer {
    /// Create a server issuing all calls through `gateway`
    pub fn new(gateway: Gateway) -> Self {
        let tool_router = Self::task_tool_router()
            + Self::project_tool_router()
            + Self::phase_tool_router()
            + Self::user_tool_router()
            + Self::field_tool_router()
            + Self::space_tool_router()
            + Self::time_entry_tool_router()
            + Self::time_off_tool_router()
            + Self::document_tool_router();

        Self {
            gateway,
            tool_router,
        }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Names of every registered tool
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        names
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for RocketlaneServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build()).with_instructions(
            "Rocketlane MCP Server - Manage Rocketlane projects, tasks, phases, users, \
             custom fields, spaces, time entries, time-off and space documents. \
             All arguments are strings; failures are reported in the text result \
             prefixed with 'Error:' or 'API Error:'."
                .to_string(),
        )
    }
}
