//! MCP tools for Rocketlane space documents.

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
use crate::format::SPACE_DOCUMENT;
use crate::gateway::ApiRequest;
use crate::mcp::RocketlaneServer;
use crate::mcp::args::{required, required_int};
use crate::mcp::tools::respond;

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetSpaceDocumentParams {
    #[schemars(description = "Space document ID")]
    #[serde(default)]
    pub document_id: String,
}

#[tool_router(router = document_tool_router, vis = "pub(crate)")]
impl RocketlaneServer {
    #[tool(description = "Get a space document by its unique ID from Rocketlane.")]
    pub async fn get_space_document(
        &self,
        params: Parameters<GetSpaceDocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "getting space document",
            self.run_get_space_document(params.0).await,
        )
    }
}

impl RocketlaneServer {
    async fn run_get_space_document(&self, p: GetSpaceDocumentParams) -> ToolResult<String> {
        required(&p.document_id, "document_id")?;
        self.ensure_configured()?;
        let document_id = required_int(&p.document_id, "document_id")?;

        info!("Getting space document {}", document_id);
        let document = self
            .fetch_record(ApiRequest::get(format!("/space-documents/{}", document_id)))
            .await?;
        // Rendered without a "retrieved" header line
        Ok(SPACE_DOCUMENT.render(&document.unwrap_or_default()))
    }
}
