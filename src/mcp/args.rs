//! String argument validation.
//!
//! Every tool argument arrives as a string; blank means "not supplied".
//! Parsing happens here, before any network call.

use crate::error::{ToolError, ToolResult};

/// Page size used by list tools when `limit` is blank
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Non-blank argument, trimmed
pub fn required<'a>(value: &'a str, name: &'static str) -> ToolResult<&'a str> {
    required_with_hint(value, name, "")
}

/// Like [`required`] with extra guidance appended to the error
pub fn required_with_hint<'a>(
    value: &'a str,
    name: &'static str,
    hint: &'static str,
) -> ToolResult<&'a str> {
    optional(value).ok_or(ToolError::MissingArgument { name, hint })
}

/// `None` for blank input
pub fn optional(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Owned, upper-cased optional value (enum-like upstream fields)
pub fn optional_upper(value: &str) -> Option<String> {
    optional(value).map(str::to_uppercase)
}

pub fn parse_int(value: &str, field: &'static str) -> ToolResult<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ToolError::InvalidInteger {
            field,
            value: value.to_string(),
        })
}

/// Required integer argument
pub fn required_int(value: &str, field: &'static str) -> ToolResult<i64> {
    parse_int(required(value, field)?, field)
}

pub fn optional_int(value: &str, field: &'static str) -> ToolResult<Option<i64>> {
    optional(value).map(|v| parse_int(v, field)).transpose()
}

/// Accepts true/false, yes/no, 1/0 in any case
pub fn optional_bool(value: &str, field: &'static str) -> ToolResult<Option<bool>> {
    let Some(v) = optional(value) else {
        return Ok(None);
    };
    match v.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(Some(true)),
        "false" | "no" | "0" => Ok(Some(false)),
        _ => Err(ToolError::InvalidBoolean {
            field,
            value: v.to_string(),
        }),
    }
}

/// `limit` argument with the default page size
pub fn page_size(limit: &str) -> ToolResult<i64> {
    Ok(optional_int(limit, "limit")?.unwrap_or(DEFAULT_PAGE_SIZE))
}

/// Comma-separated list, blanks dropped
pub fn split_list(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "args_test.rs"]
mod args_test;
