//! Text rendering of Rocketlane records.
//!
//! One [`EntityFormat`] descriptor per entity drives a single generic
//! renderer. Defaults applied here are display-only.

mod entities;

pub use entities::*;

use serde_json::Value;

use crate::normalize::{Record, display_value, is_truthy};

const MISSING: &str = "N/A";

/// How a field value is turned into text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    Plain,
    /// Objects render their inner key (e.g. `status.label`), anything else as-is
    Nested(&'static str),
    /// Value followed by `%`
    Percent,
    /// Cut to at most N characters
    Truncated(usize),
    /// List of people rendered as "first last" joined by ", "
    People,
}

/// One labeled line of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub key: &'static str,
    pub render: Render,
    /// Skip the line when the value is missing or empty
    pub optional: bool,
    /// Shown when the value is missing
    pub default: &'static str,
}

impl Field {
    pub const fn new(label: &'static str, key: &'static str) -> Self {
        Self {
            label,
            key,
            render: Render::Plain,
            optional: false,
            default: MISSING,
        }
    }

    pub const fn render(mut self, render: Render) -> Self {
        self.render = render;
        self
    }

    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub const fn default(mut self, default: &'static str) -> Self {
        self.default = default;
        self
    }
}

/// Where the heading text comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Title {
    Key(&'static str),
    /// `firstName lastName`
    FullName,
}

/// Display descriptor for one entity type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityFormat {
    /// Heading label, e.g. "Task"
    pub label: &'static str,
    /// Plural noun for "No ... found"
    pub plural: &'static str,
    /// Counted noun for "Found N ...", e.g. "task(s)"
    pub counted: &'static str,
    pub title: Title,
    pub fields: &'static [Field],
}

impl EntityFormat {
    /// Render one record as labeled lines
    pub fn render(&self, record: &Record) -> String {
        let title = match self.title {
            Title::Key(key) => lookup(record, key)
                .map(display_value)
                .unwrap_or_else(|| MISSING.to_string()),
            Title::FullName => format!(
                "{} {}",
                text_or_empty(record.get("firstName")),
                text_or_empty(record.get("lastName"))
            ),
        };

        let mut lines = vec![format!("{}: {}", self.label, title)];
        for field in self.fields {
            let value = lookup(record, field.key);
            if field.optional && !value.is_some_and(is_truthy) {
                continue;
            }
            lines.push(format!("  {}: {}", field.label, render_field(field, value)));
        }
        lines.join("\n")
    }

    /// Render a listing, or the "No ... found" message when there is nothing to show
    pub fn render_list(&self, records: &[Record]) -> String {
        if records.is_empty() {
            return self.empty_message();
        }

        let mut blocks = vec![format!("Found {} {}:\n", records.len(), self.counted)];
        for record in records {
            blocks.push(self.render(record));
            blocks.push(String::new());
        }
        blocks.join("\n")
    }

    pub fn empty_message(&self) -> String {
        format!("No {} found", self.plural)
    }
}

/// Null counts as missing
fn lookup<'a>(record: &'a Record, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|v| !v.is_null())
}

fn render_field(field: &Field, value: Option<&Value>) -> String {
    let Some(value) = value else {
        return match field.render {
            Render::Percent => format!("{}%", field.default),
            _ => field.default.to_string(),
        };
    };

    match field.render {
        Render::Plain => display_value(value),
        Render::Nested(inner) => match value {
            Value::Object(map) => lookup(map, inner)
                .map(display_value)
                .unwrap_or_else(|| field.default.to_string()),
            other => display_value(other),
        },
        Render::Percent => format!("{}%", display_value(value)),
        Render::Truncated(max) => truncate_with_ellipsis(&display_value(value), max),
        Render::People => match value {
            Value::Array(people) => people
                .iter()
                .map(|person| {
                    format!(
                        "{} {}",
                        text_or_empty(person.get("firstName")),
                        text_or_empty(person.get("lastName"))
                    )
                })
                .collect::<Vec<_>>()
                .join(", "),
            other => display_value(other),
        },
    }
}

fn text_or_empty(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(v) => display_value(v),
    }
}

/// Truncate a string with ellipsis if it exceeds max length
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
