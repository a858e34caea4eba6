//! Tool error types.
//!
//! A `ToolError` never reaches the MCP client as a protocol failure. Its
//! `Display` output is the text payload of an otherwise successful call,
//! prefixed `Error: ` for local and transport problems and `API Error: `
//! for anything the upstream service reported.

use thiserror::Error;

/// Failures of a single tool invocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Error: {name} is required{hint}")]
    MissingArgument { name: &'static str, hint: &'static str },

    #[error("Error: invalid literal for integer field {field}: '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    #[error("Error: invalid boolean for {field}: '{value}' (expected true or false)")]
    InvalidBoolean { field: &'static str, value: String },

    #[error("Error: {message}")]
    InvalidChoice { message: String },

    #[error("Error: At least one field to update is required")]
    NothingToUpdate,

    #[error("Error: ROCKETLANE_API_KEY not configured")]
    NotConfigured,

    #[error("API Error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("API Error: {message}")]
    UpstreamLogical { message: String },

    #[error("Error: {message}")]
    Transport { message: String },
}

impl ToolError {
    /// Missing required argument with no extra hint
    pub fn missing(name: &'static str) -> Self {
        ToolError::MissingArgument { name, hint: "" }
    }

    /// True for failures detected before any network call
    pub fn is_local(&self) -> bool {
        !matches!(
            self,
            ToolError::Upstream { .. }
                | ToolError::UpstreamLogical { .. }
                | ToolError::Transport { .. }
        )
    }
}

/// Result type for tool bodies.
pub type ToolResult<T> = Result<T, ToolError>;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
