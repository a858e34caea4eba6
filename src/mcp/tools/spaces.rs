//! MCP tools for Rocketlane spaces.

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

use crate::error::{ToolError, ToolResult};
use crate::format::SPACE;
use crate::gateway::ApiRequest;
use crate::mcp::RocketlaneServer;
use crate::mcp::args::{optional, optional_bool, optional_int, page_size, required, required_int};
use crate::mcp::tools::refs::{ProjectRef, render_single};
use crate::mcp::tools::{respond, with_body};

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetSpaceParams {
    #[schemars(description = "Space ID")]
    #[serde(default)]
    pub space_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CreateSpaceParams {
    #[schemars(description = "Project ID the space belongs to (required)")]
    #[serde(default)]
    pub project_id: String,
    #[schemars(description = "Space name (required)")]
    #[serde(default)]
    pub space_name: String,
    #[schemars(description = "Whether the space is private (true/false)")]
    #[serde(default)]
    pub is_private: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateSpaceParams {
    #[schemars(description = "Space ID to update (required)")]
    #[serde(default)]
    pub space_id: String,
    #[schemars(description = "New space name")]
    #[serde(default)]
    pub space_name: String,
    #[schemars(description = "Whether the space is private (true/false)")]
    #[serde(default)]
    pub is_private: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListSpacesParams {
    #[schemars(description = "Filter by project ID")]
    #[serde(default)]
    pub project_id: String,
    #[schemars(description = "Maximum number of spaces to return (default: 50)")]
    #[serde(default)]
    pub limit: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateSpaceRequest {
    pub(crate) project: ProjectRef,
    pub(crate) space_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) private: Option<bool>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateSpaceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) space_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) private: Option<bool>,
}

#[tool_router(router = space_tool_router, vis = "pub(crate)")]
impl RocketlaneServer {
    #[tool(description = "Get a space by its unique ID from Rocketlane.")]
    pub async fn get_space(
        &self,
        params: Parameters<GetSpaceParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("getting space", self.run_get_space(params.0).await)
    }

    #[tool(
        description = "Create a new space in a Rocketlane project for collaboration and documents."
    )]
    pub async fn create_space(
        &self,
        params: Parameters<CreateSpaceParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("creating space", self.run_create_space(params.0).await)
    }

    #[tool(description = "Update an existing space by ID with new name or privacy setting.")]
    pub async fn update_space(
        &self,
        params: Parameters<UpdateSpaceParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("updating space", self.run_update_space(params.0).await)
    }

    #[tool(description = "List all spaces with optional filter for project ID.")]
    pub async fn list_spaces(
        &self,
        params: Parameters<ListSpacesParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("listing spaces", self.run_list_spaces(params.0).await)
    }
}

impl RocketlaneServer {
    async fn run_get_space(&self, p: GetSpaceParams) -> ToolResult<String> {
        required(&p.space_id, "space_id")?;
        self.ensure_configured()?;
        let space_id = required_int(&p.space_id, "space_id")?;

        info!("Getting space {}", space_id);
        let space = self
            .fetch_record(ApiRequest::get(format!("/spaces/{}", space_id)))
            .await?;
        Ok(render_single(&SPACE, "retrieved", space))
    }

    async fn run_create_space(&self, p: CreateSpaceParams) -> ToolResult<String> {
        required(&p.project_id, "project_id")?;
        let space_name = required(&p.space_name, "space_name")?;
        self.ensure_configured()?;

        let body = CreateSpaceRequest {
            project: ProjectRef {
                project_id: required_int(&p.project_id, "project_id")?,
            },
            space_name: space_name.to_string(),
            private: optional_bool(&p.is_private, "is_private")?,
        };

        info!(
            "Creating space '{}' in project {}",
            body.space_name, body.project.project_id
        );
        let request = with_body(ApiRequest::post("/spaces"), &body)?;
        let space = self.fetch_record(request).await?;
        Ok(render_single(&SPACE, "created", space))
    }

    async fn run_update_space(&self, p: UpdateSpaceParams) -> ToolResult<String> {
        required(&p.space_id, "space_id")?;
        self.ensure_configured()?;
        let space_id = required_int(&p.space_id, "space_id")?;

        let body = UpdateSpaceRequest {
            space_name: optional(&p.space_name).map(str::to_string),
            private: optional_bool(&p.is_private, "is_private")?,
        };
        if body.space_name.is_none() && body.private.is_none() {
            return Err(ToolError::NothingToUpdate);
        }

        info!("Updating space {}", space_id);
        let request = with_body(ApiRequest::put(format!("/spaces/{}", space_id)), &body)?;
        let space = self.fetch_record(request).await?;
        Ok(render_single(&SPACE, "updated", space))
    }

    async fn run_list_spaces(&self, p: ListSpacesParams) -> ToolResult<String> {
        self.ensure_configured()?;

        let request = ApiRequest::get("/spaces")
            .query("pageSize", page_size(&p.limit)?)
            .query_opt("projectId", optional_int(&p.project_id, "project_id")?);

        info!("Listing spaces");
        let spaces = self.fetch_records(request).await?;
        Ok(SPACE.render_list(&spaces))
    }
}
