//! Response envelope decoding.
//!
//! The Rocketlane API answers in several shapes and does not say which one a
//! given endpoint uses:
//!
//! - a bare object or array
//! - a wrapper with the result under `data` or `results`
//! - an `errors` wrapper, sometimes with HTTP 200
//!
//! [`normalize`] decodes any of these once into an [`Envelope`] so tools never
//! sniff shapes themselves. It is a pure function of its input.

use serde_json::{Map, Value};

use crate::error::ToolError;

/// Entity record as returned by the upstream API
pub type Record = Map<String, Value>;

/// What the calling tool expects back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// list/search tools
    Collection,
    /// get/create/update tools
    Single,
}

/// Decoded response
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// Upstream reported a logical error
    Error(String),
    /// Non-empty list of records (non-object elements dropped)
    Collection(Vec<Record>),
    /// One record
    Single(Record),
    /// Nothing usable
    Empty,
}

impl Envelope {
    /// Records for a list tool; an upstream logical error becomes `ToolError`
    pub fn into_records(self) -> Result<Vec<Record>, ToolError> {
        match self {
            Envelope::Error(message) => Err(ToolError::UpstreamLogical { message }),
            Envelope::Collection(records) => Ok(records),
            Envelope::Single(record) => Ok(vec![record]),
            Envelope::Empty => Ok(Vec::new()),
        }
    }

    /// Record for a get/create/update tool
    pub fn into_record(self) -> Result<Option<Record>, ToolError> {
        match self {
            Envelope::Error(message) => Err(ToolError::UpstreamLogical { message }),
            Envelope::Single(record) => Ok(Some(record)),
            Envelope::Collection(records) => Ok(records.into_iter().next()),
            Envelope::Empty => Ok(None),
        }
    }
}

/// Decode a successful response body.
///
/// `None` is the empty-body sentinel the gateway produces for 204 and blank responses.
pub fn normalize(body: Option<&Value>, expect: Expect) -> Envelope {
    let Some(body) = body else {
        return Envelope::Empty;
    };

    if let Some(message) = error_message(body) {
        return Envelope::Error(message);
    }

    let payload = match body {
        Value::Object(map) => map
            .get("data")
            .or_else(|| map.get("results"))
            .unwrap_or(body),
        _ => body,
    };

    match (expect, payload) {
        (Expect::Collection, Value::Array(items)) => {
            let records: Vec<Record> = items
                .iter()
                .filter_map(|item| item.as_object().cloned())
                .collect();
            if records.is_empty() {
                Envelope::Empty
            } else {
                Envelope::Collection(records)
            }
        }
        (Expect::Collection, _) => Envelope::Empty,
        (Expect::Single, Value::Object(record)) => Envelope::Single(record.clone()),
        (Expect::Single, Value::Array(items)) => items
            .iter()
            .find_map(|item| item.as_object().cloned())
            .map(Envelope::Single)
            .unwrap_or(Envelope::Empty),
        (Expect::Single, _) => Envelope::Empty,
    }
}

/// Message from an `errors` wrapper, if the body is one.
///
/// Takes the first element of a list (or the value itself), preferring its
/// `errorMessage` field and falling back to its textual form.
pub fn error_message(body: &Value) -> Option<String> {
    let errors = body.as_object()?.get("errors")?;
    if !is_truthy(errors) {
        return None;
    }

    let first = match errors {
        Value::Array(items) => items.first()?,
        other => other,
    };

    let message = match first {
        Value::Object(entry) => entry
            .get("errorMessage")
            .map(display_value)
            .unwrap_or_else(|| first.to_string()),
        other => display_value(other),
    };
    Some(message)
}

/// Render upstream HTTP failures; the raw text is authoritative and not reparsed
pub fn render_upstream_error(status: u16, raw_body: &str) -> String {
    ToolError::Upstream {
        status,
        body: raw_body.to_string(),
    }
    .to_string()
}

/// Strings without quotes, everything else as JSON text
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
