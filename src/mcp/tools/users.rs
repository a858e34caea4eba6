//! MCP tools for Rocketlane users.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ToolResult;
use crate::format::USER;
use crate::gateway::ApiRequest;
use crate::mcp::RocketlaneServer;
use crate::mcp::args::{optional_upper, page_size, required, required_int};
use crate::mcp::tools::refs::render_single;
use crate::mcp::tools::respond;

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetUserParams {
    #[schemars(description = "User ID")]
    #[serde(default)]
    pub user_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListUsersParams {
    #[schemars(description = "Filter by user type: TEAM_MEMBER, PARTNER, or CUSTOMER")]
    #[serde(default)]
    pub user_type: String,
    #[schemars(description = "Filter by status")]
    #[serde(default)]
    pub status: String,
    #[schemars(description = "Maximum number of users to return (default: 50)")]
    #[serde(default)]
    pub limit: String,
}

#[tool_router(router = user_tool_router, vis = "pub(crate)")]
impl RocketlaneServer {
    #[tool(description = "Get a user by their unique ID from Rocketlane.")]
    pub async fn get_user(
        &self,
        params: Parameters<GetUserParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("getting user", self.run_get_user(params.0).await)
    }

    #[tool(
        description = "List all users with optional filters for type (TEAM_MEMBER, PARTNER, CUSTOMER) or status."
    )]
    pub async fn list_users(
        &self,
        params: Parameters<ListUsersParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("listing users", self.run_list_users(params.0).await)
    }
}

impl RocketlaneServer {
    async fn run_get_user(&self, p: GetUserParams) -> ToolResult<String> {
        required(&p.user_id, "user_id")?;
        self.ensure_configured()?;
        let user_id = required_int(&p.user_id, "user_id")?;

        info!("Getting user {}", user_id);
        let user = self
            .fetch_record(ApiRequest::get(format!("/users/{}", user_id)))
            .await?;
        Ok(render_single(&USER, "retrieved", user))
    }

    async fn run_list_users(&self, p: ListUsersParams) -> ToolResult<String> {
        self.ensure_configured()?;

        let request = ApiRequest::get("/users")
            .query("pageSize", page_size(&p.limit)?)
            .query_opt("type", optional_upper(&p.user_type))
            .query_opt("status", optional_upper(&p.status));

        info!("Listing users");
        let users = self.fetch_records(request).await?;
        Ok(USER.render_list(&users))
    }
}
