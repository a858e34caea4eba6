//! Nested reference objects used in Rocketlane request bodies.

use serde::Serialize;

use crate::format::EntityFormat;
use crate::normalize::Record;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    pub project_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseRef {
    pub phase_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRef {
    pub task_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRef {
    pub email_id: String,
}

impl EmailRef {
    pub fn new(email: &str) -> Self {
        Self {
            email_id: email.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRef {
    pub company_name: String,
}

/// Status is set by its numeric value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusValue {
    pub value: i64,
}

/// "<Entity> <verb>:" followed by the record, or a note when nothing came back
pub(crate) fn render_single(
    format: &EntityFormat,
    verb: &str,
    record: Option<Record>,
) -> String {
    match record {
        Some(record) => format!("{} {}:\n{}", format.label, verb, format.render(&record)),
        None => format!(
            "{} {}: no {} details returned",
            format.label,
            verb,
            format.label.to_lowercase()
        ),
    }
}
