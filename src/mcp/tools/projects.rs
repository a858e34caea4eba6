//! MCP tools for Rocketlane projects.

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
use crate::format::PROJECT;
use crate::gateway::ApiRequest;
use crate::mcp::RocketlaneServer;
use crate::mcp::args::{optional, page_size, required, required_int};
use crate::mcp::tools::refs::{CompanyRef, EmailRef, render_single};
use crate::mcp::tools::{respond, with_body};

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetProjectParams {
    #[schemars(description = "Project ID")]
    #[serde(default)]
    pub project_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CreateProjectParams {
    #[schemars(description = "Project name (required)")]
    #[serde(default)]
    pub project_name: String,
    #[schemars(
        description = "Customer company name. Must differ from your own organization's name; append ' - Customer' on a name conflict."
    )]
    #[serde(default)]
    pub customer_name: String,
    #[schemars(description = "Project owner's email address")]
    #[serde(default)]
    pub owner_email: String,
    #[schemars(description = "Start date (YYYY-MM-DD)")]
    #[serde(default)]
    pub start_date: String,
    #[schemars(description = "Due date (YYYY-MM-DD)")]
    #[serde(default)]
    pub due_date: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListProjectsParams {
    #[schemars(description = "Filter by status")]
    #[serde(default)]
    pub status: String,
    #[schemars(description = "Filter by customer name")]
    #[serde(default)]
    pub customer_name: String,
    #[schemars(description = "Maximum number of projects to return (default: 50)")]
    #[serde(default)]
    pub limit: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ArchiveProjectParams {
    #[schemars(description = "Project ID to archive")]
    #[serde(default)]
    pub project_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateProjectRequest {
    pub(crate) project_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) customer: Option<CompanyRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) owner: Option<EmailRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) due_date: Option<String>,
}

#[tool_router(router = project_tool_router, vis = "pub(crate)")]
impl RocketlaneServer {
    #[tool(description = "Get a project by its unique ID from Rocketlane.")]
    pub async fn get_project(
        &self,
        params: Parameters<GetProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("getting project", self.run_get_project(params.0).await)
    }

    #[tool(
        description = "Create a new project with name, customer, owner, dates. Customer name must differ from vendor name."
    )]
    pub async fn create_project(
        &self,
        params: Parameters<CreateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("creating project", self.run_create_project(params.0).await)
    }

    #[tool(description = "List all projects with optional filters for status or customer name.")]
    pub async fn list_projects(
        &self,
        params: Parameters<ListProjectsParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("listing projects", self.run_list_projects(params.0).await)
    }

    #[tool(description = "Archive a project by ID - archived projects can be restored later.")]
    pub async fn archive_project(
        &self,
        params: Parameters<ArchiveProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("archiving project", self.run_archive_project(params.0).await)
    }
}

impl RocketlaneServer {
    async fn run_get_project(&self, p: GetProjectParams) -> ToolResult<String> {
        required(&p.project_id, "project_id")?;
        self.ensure_configured()?;
        let project_id = required_int(&p.project_id, "project_id")?;

        info!("Getting project {}", project_id);
        let project = self
            .fetch_record(ApiRequest::get(format!("/projects/{}", project_id)))
            .await?;
        Ok(render_single(&PROJECT, "retrieved", project))
    }

    async fn run_create_project(&self, p: CreateProjectParams) -> ToolResult<String> {
        let project_name = required(&p.project_name, "project_name")?;
        self.ensure_configured()?;

        let body = CreateProjectRequest {
            project_name: project_name.to_string(),
            customer: optional(&p.customer_name).map(|name| CompanyRef {
                company_name: name.to_string(),
            }),
            owner: optional(&p.owner_email).map(EmailRef::new),
            start_date: optional(&p.start_date).map(str::to_string),
            due_date: optional(&p.due_date).map(str::to_string),
        };

        info!("Creating project '{}'", body.project_name);
        let request = with_body(ApiRequest::post("/projects"), &body)?;
        let project = self.fetch_record(request).await?;
        Ok(render_single(&PROJECT, "created", project))
    }

    async fn run_list_projects(&self, p: ListProjectsParams) -> ToolResult<String> {
        self.ensure_configured()?;

        let request = ApiRequest::get("/projects")
            .query("pageSize", page_size(&p.limit)?)
            .query_opt("status", optional(&p.status))
            .query_opt("customerName", optional(&p.customer_name));

        info!("Listing projects");
        let projects = self.fetch_records(request).await?;
        Ok(PROJECT.render_list(&projects))
    }

    async fn run_archive_project(&self, p: ArchiveProjectParams) -> ToolResult<String> {
        required(&p.project_id, "project_id")?;
        self.ensure_configured()?;
        let project_id = required_int(&p.project_id, "project_id")?;

        info!("Archiving project {}", project_id);
        self.perform(ApiRequest::post(format!("/projects/{}/archive", project_id)))
            .await?;
        Ok(format!("Project {} archived successfully", project_id))
    }
}
