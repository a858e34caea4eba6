//! MCP tools for Rocketlane time entries.

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
use crate::format::TIME_ENTRY;
use crate::gateway::ApiRequest;
use crate::mcp::RocketlaneServer;
use crate::mcp::args::{optional, optional_int, page_size, required, required_int};
use crate::mcp::tools::refs::render_single;
use crate::mcp::tools::respond;

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetTimeEntryParams {
    #[schemars(description = "Time entry ID")]
    #[serde(default)]
    pub time_entry_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchTimeEntriesParams {
    #[schemars(description = "Filter by user ID")]
    #[serde(default)]
    pub user_id: String,
    #[schemars(description = "Filter by project ID")]
    #[serde(default)]
    pub project_id: String,
    #[schemars(description = "Earliest entry date, inclusive (YYYY-MM-DD)")]
    #[serde(default)]
    pub date_from: String,
    #[schemars(description = "Latest entry date, inclusive (YYYY-MM-DD)")]
    #[serde(default)]
    pub date_to: String,
    #[schemars(description = "Maximum number of entries to return (default: 50)")]
    #[serde(default)]
    pub limit: String,
}

#[tool_router(router = time_entry_tool_router, vis = "pub(crate)")]
impl RocketlaneServer {
    #[tool(description = "Get a time entry by its unique ID from Rocketlane.")]
    pub async fn get_time_entry(
        &self,
        params: Parameters<GetTimeEntryParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("getting time entry", self.run_get_time_entry(params.0).await)
    }

    #[tool(
        description = "Search time entries with filters for user, project, and date range (YYYY-MM-DD format)."
    )]
    pub async fn search_time_entries(
        &self,
        params: Parameters<SearchTimeEntriesParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "searching time entries",
            self.run_search_time_entries(params.0).await,
        )
    }
}

impl RocketlaneServer {
    async fn run_get_time_entry(&self, p: GetTimeEntryParams) -> ToolResult<String> {
        required(&p.time_entry_id, "time_entry_id")?;
        self.ensure_configured()?;
        let entry_id = required_int(&p.time_entry_id, "time_entry_id")?;

        info!("Getting time entry {}", entry_id);
        let entry = self
            .fetch_record(ApiRequest::get(format!("/time-entries/{}", entry_id)))
            .await?;
        Ok(render_single(&TIME_ENTRY, "retrieved", entry))
    }

    // This endpoint pages with `limit`, not `pageSize`
    async fn run_search_time_entries(&self, p: SearchTimeEntriesParams) -> ToolResult<String> {
        self.ensure_configured()?;

        let request = ApiRequest::get("/time-entries/search")
            .query("limit", page_size(&p.limit)?)
            .query_opt("userId.eq", optional_int(&p.user_id, "user_id")?)
            .query_opt("projectId.eq", optional_int(&p.project_id, "project_id")?)
            .query_opt("date.gte", optional(&p.date_from))
            .query_opt("date.lte", optional(&p.date_to));

        info!("Searching time entries");
        let entries = self.fetch_records(request).await?;
        Ok(TIME_ENTRY.render_list(&entries))
    }
}
