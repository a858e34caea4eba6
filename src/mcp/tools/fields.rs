//! MCP tools for Rocketlane custom fields.

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
use crate::format::FIELD;
use crate::gateway::ApiRequest;
use crate::mcp::RocketlaneServer;
use crate::mcp::args::{
    optional, optional_upper, page_size, required, required_int, required_with_hint,
};
use crate::mcp::tools::refs::render_single;
use crate::mcp::tools::{respond, with_body};

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetFieldParams {
    #[schemars(description = "Field ID")]
    #[serde(default)]
    pub field_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CreateFieldParams {
    #[schemars(description = "Field label (required)")]
    #[serde(default)]
    pub label: String,
    #[schemars(description = "Field type, e.g. TEXT, NUMBER, DATE, SELECT (required)")]
    #[serde(default)]
    pub field_type: String,
    #[schemars(description = "Field description")]
    #[serde(default)]
    pub description: String,
    #[schemars(description = "Entity the field applies to, e.g. TASK or PROJECT")]
    #[serde(default)]
    pub entity_type: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateFieldParams {
    #[schemars(description = "Field ID to update (required)")]
    #[serde(default)]
    pub field_id: String,
    #[schemars(description = "New label")]
    #[serde(default)]
    pub label: String,
    #[schemars(description = "New description")]
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListFieldsParams {
    #[schemars(description = "Filter by entity type, e.g. TASK or PROJECT")]
    #[serde(default)]
    pub entity_type: String,
    #[schemars(description = "Maximum number of fields to return (default: 50)")]
    #[serde(default)]
    pub limit: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateFieldRequest {
    pub(crate) label: String,
    #[serde(rename = "type")]
    pub(crate) field_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) entity_type: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct UpdateFieldRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
}

#[tool_router(router = field_tool_router, vis = "pub(crate)")]
impl RocketlaneServer {
    #[tool(description = "Get a custom field by its unique ID from Rocketlane.")]
    pub async fn get_field(
        &self,
        params: Parameters<GetFieldParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("getting field", self.run_get_field(params.0).await)
    }

    #[tool(
        description = "Create a new custom field in Rocketlane with label, type, and optional description."
    )]
    pub async fn create_field(
        &self,
        params: Parameters<CreateFieldParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("creating field", self.run_create_field(params.0).await)
    }

    #[tool(description = "Update an existing custom field by ID with new label or description.")]
    pub async fn update_field(
        &self,
        params: Parameters<UpdateFieldParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("updating field", self.run_update_field(params.0).await)
    }

    #[tool(
        description = "List all custom fields with optional filter for entity type (TASK, PROJECT, etc.)."
    )]
    pub async fn list_fields(
        &self,
        params: Parameters<ListFieldsParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("listing fields", self.run_list_fields(params.0).await)
    }
}

impl RocketlaneServer {
    async fn run_get_field(&self, p: GetFieldParams) -> ToolResult<String> {
        required(&p.field_id, "field_id")?;
        self.ensure_configured()?;
        let field_id = required_int(&p.field_id, "field_id")?;

        info!("Getting field {}", field_id);
        let field = self
            .fetch_record(ApiRequest::get(format!("/fields/{}", field_id)))
            .await?;
        Ok(render_single(&FIELD, "retrieved", field))
    }

    async fn run_create_field(&self, p: CreateFieldParams) -> ToolResult<String> {
        let label = required(&p.label, "label")?;
        let field_type =
            required_with_hint(&p.field_type, "field_type", " (TEXT, NUMBER, DATE, SELECT, etc.)")?;
        self.ensure_configured()?;

        let body = CreateFieldRequest {
            label: label.to_string(),
            field_type: field_type.to_uppercase(),
            description: optional(&p.description).map(str::to_string),
            entity_type: optional_upper(&p.entity_type),
        };

        info!("Creating field '{}'", body.label);
        let request = with_body(ApiRequest::post("/fields"), &body)?;
        let field = self.fetch_record(request).await?;
        Ok(render_single(&FIELD, "created", field))
    }

    async fn run_update_field(&self, p: UpdateFieldParams) -> ToolResult<String> {
        required(&p.field_id, "field_id")?;
        self.ensure_configured()?;
        let field_id = required_int(&p.field_id, "field_id")?;

        let body = UpdateFieldRequest {
            label: optional(&p.label).map(str::to_string),
            description: optional(&p.description).map(str::to_string),
        };
        if body.label.is_none() && body.description.is_none() {
            return Err(ToolError::NothingToUpdate);
        }

        info!("Updating field {}", field_id);
        let request = with_body(ApiRequest::put(format!("/fields/{}", field_id)), &body)?;
        let field = self.fetch_record(request).await?;
        Ok(render_single(&FIELD, "updated", field))
    }

    async fn run_list_fields(&self, p: ListFieldsParams) -> ToolResult<String> {
        self.ensure_configured()?;

        let request = ApiRequest::get("/fields")
            .query("pageSize", page_size(&p.limit)?)
            .query_opt("entityType", optional_upper(&p.entity_type));

        info!("Listing fields");
        let fields = self.fetch_records(request).await?;
        Ok(FIELD.render_list(&fields))
    }
}
