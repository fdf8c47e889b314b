//! Lake package descriptor (`lakefile.toml`) parsing.

use serde::Deserialize;
use serde_json::{Map, Number, Value as JsonValue};
use toml::{Table, Value};

use crate::domain::AppError;

/// File name of the Lake package descriptor inside a package directory.
pub const LAKEFILE: &str = "lakefile.toml";

pub const DEFAULT_TARGETS_KEY: &str = "defaultTargets";

/// The fields of a Lake package descriptor that outputs are derived from.
///
/// Other keys in the document are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageDescriptor {
    pub name: Option<String>,
    #[serde(rename = "defaultTargets")]
    pub default_targets: Option<Vec<String>>,
}

impl PackageDescriptor {
    /// Extract the typed fields from a parsed document.
    pub fn from_document(document: &Table) -> Result<Self, AppError> {
        Value::Table(document.clone()).try_into::<Self>().map_err(|e| {
            let detail = e.to_string();
            AppError::MissingField(format!("Unexpected value in `{LAKEFILE}`: {}", detail.trim_end()))
        })
    }
}

/// Parse `lakefile.toml` content into a TOML document.
///
/// Only syntax is checked here; field shapes are checked when outputs are derived.
pub fn parse_descriptor(content: &str) -> Result<Table, AppError> {
    Ok(content.parse::<Table>()?)
}

/// Render a TOML table as compact JSON.
///
/// Date-times become their TOML text form and non-finite floats become `null`,
/// matching what JavaScript's `JSON.stringify` does for the same document.
pub fn render_json(table: &Table) -> Result<String, AppError> {
    let json = table_to_json(table);
    let rendered = serde_json::to_string(&json)?;
    debug_assert!(!rendered.contains('\n'), "descriptor JSON must be single-line");
    Ok(rendered)
}

fn table_to_json(table: &Table) -> JsonValue {
    let map: Map<String, JsonValue> =
        table.iter().map(|(key, value)| (key.clone(), value_to_json(value))).collect();
    JsonValue::Object(map)
}

fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Integer(i) => JsonValue::Number((*i).into()),
        Value::Float(f) => Number::from_f64(*f).map(JsonValue::Number).unwrap_or(JsonValue::Null),
        Value::Boolean(b) => JsonValue::Bool(*b),
        Value::Datetime(dt) => JsonValue::String(dt.to_string()),
        Value::Array(items) => JsonValue::Array(items.iter().map(value_to_json).collect()),
        Value::Table(table) => table_to_json(table),
    }
}
