//! MCP tools for Rocketlane project phases.

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
use crate::format::PHASE;
use crate::gateway::ApiRequest;
use crate::mcp::RocketlaneServer;
use crate::mcp::args::{
    optional, optional_bool, optional_int, page_size, required, required_int,
};
use crate::mcp::tools::refs::{ProjectRef, StatusValue, render_single};
use crate::mcp::tools::{respond, with_body};

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetPhaseParams {
    #[schemars(description = "Phase ID")]
    #[serde(default)]
    pub phase_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CreatePhaseParams {
    #[schemars(description = "Project ID the phase belongs to (required)")]
    #[serde(default)]
    pub project_id: String,
    #[schemars(description = "Phase name (required)")]
    #[serde(default)]
    pub phase_name: String,
    #[schemars(description = "Start date (YYYY-MM-DD)")]
    #[serde(default)]
    pub start_date: String,
    #[schemars(description = "Due date (YYYY-MM-DD)")]
    #[serde(default)]
    pub due_date: String,
    #[schemars(description = "Whether the phase is private (true/false)")]
    #[serde(default)]
    pub is_private: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdatePhaseParams {
    #[schemars(description = "Phase ID to update (required)")]
    #[serde(default)]
    pub phase_id: String,
    #[schemars(description = "New phase name")]
    #[serde(default)]
    pub phase_name: String,
    #[schemars(description = "New start date (YYYY-MM-DD)")]
    #[serde(default)]
    pub start_date: String,
    #[schemars(description = "New due date (YYYY-MM-DD)")]
    #[serde(default)]
    pub due_date: String,
    #[schemars(description = "Numeric status value")]
    #[serde(default)]
    pub status_value: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct DeletePhaseParams {
    #[schemars(description = "Phase ID to delete")]
    #[serde(default)]
    pub phase_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListPhasesParams {
    #[schemars(description = "Filter by project ID")]
    #[serde(default)]
    pub project_id: String,
    #[schemars(description = "Maximum number of phases to return (default: 50)")]
    #[serde(default)]
    pub limit: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatePhaseRequest {
    pub(crate) project: ProjectRef,
    pub(crate) phase_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) private: Option<bool>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdatePhaseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) phase_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) status: Option<StatusValue>,
}

impl UpdatePhaseRequest {
    fn is_empty(&self) -> bool {
        self.phase_name.is_none()
            && self.start_date.is_none()
            && self.due_date.is_none()
            && self.status.is_none()
    }
}

#[tool_router(router = phase_tool_router, vis = "pub(crate)")]
impl RocketlaneServer {
    #[tool(description = "Get a phase by its unique ID from Rocketlane.")]
    pub async fn get_phase(
        &self,
        params: Parameters<GetPhaseParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("getting phase", self.run_get_phase(params.0).await)
    }

    #[tool(description = "Create a new phase in a Rocketlane project with name and dates.")]
    pub async fn create_phase(
        &self,
        params: Parameters<CreatePhaseParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("creating phase", self.run_create_phase(params.0).await)
    }

    #[tool(description = "Update an existing phase by ID with new name, dates, or status.")]
    pub async fn update_phase(
        &self,
        params: Parameters<UpdatePhaseParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("updating phase", self.run_update_phase(params.0).await)
    }

    #[tool(description = "Delete a phase by its unique ID - this action cannot be undone.")]
    pub async fn delete_phase(
        &self,
        params: Parameters<DeletePhaseParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("deleting phase", self.run_delete_phase(params.0).await)
    }

    #[tool(description = "List all phases with optional filter for project ID.")]
    pub async fn list_phases(
        &self,
        params: Parameters<ListPhasesParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("listing phases", self.run_list_phases(params.0).await)
    }
}

impl RocketlaneServer {
    async fn run_get_phase(&self, p: GetPhaseParams) -> ToolResult<String> {
        required(&p.phase_id, "phase_id")?;
        self.ensure_configured()?;
        let phase_id = required_int(&p.phase_id, "phase_id")?;

        info!("Getting phase {}", phase_id);
        let phase = self
            .fetch_record(ApiRequest::get(format!("/phases/{}", phase_id)))
            .await?;
        Ok(render_single(&PHASE, "retrieved", phase))
    }

    async fn run_create_phase(&self, p: CreatePhaseParams) -> ToolResult<String> {
        required(&p.project_id, "project_id")?;
        let phase_name = required(&p.phase_name, "phase_name")?;
        self.ensure_configured()?;

        let body = CreatePhaseRequest {
            project: ProjectRef {
                project_id: required_int(&p.project_id, "project_id")?,
            },
            phase_name: phase_name.to_string(),
            start_date: optional(&p.start_date).map(str::to_string),
            due_date: optional(&p.due_date).map(str::to_string),
            private: optional_bool(&p.is_private, "is_private")?,
        };

        info!(
            "Creating phase '{}' in project {}",
            body.phase_name, body.project.project_id
        );
        let request = with_body(ApiRequest::post("/phases"), &body)?;
        let phase = self.fetch_record(request).await?;
        Ok(render_single(&PHASE, "created", phase))
    }

    async fn run_update_phase(&self, p: UpdatePhaseParams) -> ToolResult<String> {
        required(&p.phase_id, "phase_id")?;
        self.ensure_configured()?;
        let phase_id = required_int(&p.phase_id, "phase_id")?;

        let body = UpdatePhaseRequest {
            phase_name: optional(&p.phase_name).map(str::to_string),
            start_date: optional(&p.start_date).map(str::to_string),
            due_date: optional(&p.due_date).map(str::to_string),
            status: optional_int(&p.status_value, "status_value")?.map(|value| StatusValue { value }),
        };
        if body.is_empty() {
            return Err(ToolError::NothingToUpdate);
        }

        info!("Updating phase {}", phase_id);
        let request = with_body(ApiRequest::put(format!("/phases/{}", phase_id)), &body)?;
        let phase = self.fetch_record(request).await?;
        Ok(render_single(&PHASE, "updated", phase))
    }

    async fn run_delete_phase(&self, p: DeletePhaseParams) -> ToolResult<String> {
        required(&p.phase_id, "phase_id")?;
        self.ensure_configured()?;
        let phase_id = required_int(&p.phase_id, "phase_id")?;

        info!("Deleting phase {}", phase_id);
        let status = self
            .perform(ApiRequest::delete(format!("/phases/{}", phase_id)))
            .await?;
        if status == 204 {
            Ok(format!("Phase {} deleted successfully", phase_id))
        } else {
            Ok(format!("Phase {} deleted", phase_id))
        }
    }

    async fn run_list_phases(&self, p: ListPhasesParams) -> ToolResult<String> {
        self.ensure_configured()?;

        let request = ApiRequest::get("/phases")
            .query("pageSize", page_size(&p.limit)?)
            .query_opt("projectId", optional_int(&p.project_id, "project_id")?);

        info!("Listing phases");
        let phases = self.fetch_records(request).await?;
        Ok(PHASE.render_list(&phases))
    }
}
