//! JSON formatter, minifier and validator
//!
//! Parsing goes through `serde_json` with insertion order preserved, so the
//! formatted output keeps keys where the author put them.

use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum JsonAction {
    Format,
    Minify,
    Validate,
}

impl JsonAction {
    fn verb(self) -> &'static str {
        match self {
            JsonAction::Format => "JSON to format",
            JsonAction::Minify => "JSON to minify",
            JsonAction::Validate => "JSON to validate",
        }
    }

    pub(crate) fn past_tense(self) -> &'static str {
        match self {
            JsonAction::Format => "formatted",
            JsonAction::Minify => "minified",
            JsonAction::Validate => "valid",
        }
    }
}

/// Summary of a parsed document
#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct JsonInfo {
    /// Characters in the minified form
    pub(crate) size: usize,
    /// Top-level object keys or array elements
    pub(crate) keys: usize,
    #[serde(rename = "type")]
    pub(crate) kind: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct JsonResult {
    pub(crate) action: JsonAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) output: Option<String>,
    pub(crate) info: JsonInfo,
}

pub(crate) fn parse(input: &str, action: JsonAction) -> Result<Value, AppError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::EmptyInput {
            what: action.verb(),
        });
    }
    serde_json::from_str(trimmed).map_err(|e| AppError::InvalidJson(e.to_string()))
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn count_keys(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        _ => 0,
    }
}

pub(crate) fn info(value: &Value) -> JsonInfo {
    JsonInfo {
        size: value.to_string().chars().count(),
        keys: count_keys(value),
        kind: type_name(value),
    }
}

pub(crate) fn format(value: &Value) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::InvalidJson(e.to_string()))
}

pub(crate) fn minify(value: &Value) -> Result<String, AppError> {
    serde_json::to_string(value).map_err(|e| AppError::InvalidJson(e.to_string()))
}

pub(crate) fn run(action: JsonAction, input: &str) -> Result<JsonResult, AppError> {
    let value = parse(input, action)?;
    let output = match action {
        JsonAction::Format => Some(format(&value)?),
        JsonAction::Minify => Some(minify(&value)?),
        JsonAction::Validate => None,
    };
    Ok(JsonResult {
        action,
        output,
        info: info(&value),
    })
}
