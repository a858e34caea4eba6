//! MCP tools for Rocketlane time-off.

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
use crate::gateway::ApiRequest;
use crate::mcp::RocketlaneServer;
use crate::mcp::args::{optional, required, required_with_hint};
use crate::mcp::tools::refs::EmailRef;
use crate::mcp::tools::{respond, with_body};

const DATE_HINT: &str = " (YYYY-MM-DD)";

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CreateTimeOffParams {
    #[schemars(description = "Email address of the user taking time off (required)")]
    #[serde(default)]
    pub user_email: String,
    #[schemars(description = "First day off (YYYY-MM-DD, required)")]
    #[serde(default)]
    pub start_date: String,
    #[schemars(description = "Last day off (YYYY-MM-DD, required)")]
    #[serde(default)]
    pub end_date: String,
    #[schemars(description = "Reason for the time off")]
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateTimeOffRequest {
    pub(crate) user: EmailRef,
    pub(crate) start_date: String,
    pub(crate) end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) reason: Option<String>,
}

#[tool_router(router = time_off_tool_router, vis = "pub(crate)")]
impl RocketlaneServer {
    #[tool(
        description = "Create a time-off request for a user with start/end dates (YYYY-MM-DD) and optional reason."
    )]
    pub async fn create_time_off(
        &self,
        params: Parameters<CreateTimeOffParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("creating time-off", self.run_create_time_off(params.0).await)
    }
}

impl RocketlaneServer {
    async fn run_create_time_off(&self, p: CreateTimeOffParams) -> ToolResult<String> {
        let user_email = required(&p.user_email, "user_email")?;
        let start_date = required_with_hint(&p.start_date, "start_date", DATE_HINT)?;
        let end_date = required_with_hint(&p.end_date, "end_date", DATE_HINT)?;
        self.ensure_configured()?;

        let body = CreateTimeOffRequest {
            user: EmailRef::new(user_email),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            reason: optional(&p.reason).map(str::to_string),
        };

        info!("Creating time-off for {}", user_email);
        let request = with_body(ApiRequest::post("/time-offs"), &body)?;
        self.perform(request).await?;
        Ok(format!(
            "Time-off created for {} from {} to {}",
            user_email, start_date, end_date
        ))
    }
}
