//! Discriminated result of a single upstream call.

use serde_json::Value;

use crate::error::ToolError;

/// Every way an outbound call can end.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 2xx status. `body` is `None` when the response carried no content (e.g. 204).
    Success { status: u16, body: Option<Value> },
    /// Non-2xx status with the raw response text preserved verbatim.
    UpstreamError { status: u16, body: String },
    /// Network error, timeout, or undecodable body on a 2xx status.
    TransportFailure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Collapse into the success payload, turning failures into `ToolError`s.
    pub fn into_payload(self) -> Result<(u16, Option<Value>), ToolError> {
        match self {
            Outcome::Success { status, body } => Ok((status, body)),
            Outcome::UpstreamError { status, body } => Err(ToolError::Upstream { status, body }),
            Outcome::TransportFailure(message) => Err(ToolError::Transport { message }),
        }
    }
}
