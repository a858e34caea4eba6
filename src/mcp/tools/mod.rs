//! MCP tool implementations
//!
//! One module per Rocketlane entity, each contributing a tool router to
//! [`RocketlaneServer`]. Every tool follows the same path: validate string
//! arguments, make one upstream call, normalize, render text. Failures are
//! rendered into the text result, never returned as protocol errors.

mod documents;
mod fields;
mod phases;
mod projects;
mod refs;
mod spaces;
mod tasks;
mod time_entries;
mod time_offs;
mod users;

pub use documents::*;
pub use fields::*;
pub use phases::*;
pub use projects::*;
pub use spaces::*;
pub use tasks::*;
pub use time_entries::*;
pub use time_offs::*;
pub use users::*;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use tracing::{debug, error};

use crate::error::{ToolError, ToolResult};
use crate::gateway::ApiRequest;
use crate::mcp::RocketlaneServer;
use crate::normalize::{Envelope, Expect, Record, normalize};

/// Wrap a tool body's outcome as a successful MCP result
pub(crate) fn respond(
    operation: &str,
    result: ToolResult<String>,
) -> Result<CallToolResult, McpError> {
    let text = match result {
        Ok(text) => text,
        Err(e) => {
            match &e {
                ToolError::UpstreamLogical { .. } => error!("Error {}: {}", operation, e),
                local if local.is_local() => debug!("Rejected {}: {}", operation, e),
                // Upstream and transport failures were logged by the gateway
                _ => {}
            }
            e.to_string()
        }
    };
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Serialize a request body into the descriptor
pub(crate) fn with_body<T: serde::Serialize>(
    request: ApiRequest,
    body: &T,
) -> ToolResult<ApiRequest> {
    request.json(body).map_err(|e| ToolError::Transport {
        message: e.to_string(),
    })
}

impl RocketlaneServer {
    /// Fail fast when no credential was configured
    pub(crate) fn ensure_configured(&self) -> ToolResult<()> {
        if self.gateway().has_api_key() {
            Ok(())
        } else {
            Err(ToolError::NotConfigured)
        }
    }

    async fn call(&self, request: ApiRequest, expect: Expect) -> ToolResult<(u16, Envelope)> {
        let (status, body) = self.gateway().execute(request).await.into_payload()?;
        Ok((status, normalize(body.as_ref(), expect)))
    }

    /// get/create/update style call
    pub(crate) async fn fetch_record(&self, request: ApiRequest) -> ToolResult<Option<Record>> {
        let (_, envelope) = self.call(request, Expect::Single).await?;
        envelope.into_record()
    }

    /// list/search style call
    pub(crate) async fn fetch_records(&self, request: ApiRequest) -> ToolResult<Vec<Record>> {
        let (_, envelope) = self.call(request, Expect::Collection).await?;
        envelope.into_records()
    }

    /// Action call whose body is not displayed; returns the HTTP status.
    ///
    /// A 2xx body carrying an `errors` list still counts as a failure.
    pub(crate) async fn perform(&self, request: ApiRequest) -> ToolResult<u16> {
        let (status, envelope) = self.call(request, Expect::Single).await?;
        if let Envelope::Error(message) = envelope {
            return Err(ToolError::UpstreamLogical { message });
        }
        Ok(status)
    }
}

#[cfg(test)]
mod tasks_test;
#[cfg(test)]
mod documents_test;
