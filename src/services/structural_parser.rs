use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// Strictly parses the repaired candidate; the top level must be an array.
pub fn parse_candidate(candidate: &str) -> AppResult<Vec<Value>> {
    let value: Value = serde_json::from_str(candidate).map_err(|e| AppError::ParseError {
        candidate: candidate.to_string(),
        reason: e.to_string(),
    })?;

    match value {
        Value::Array(items) => Ok(items),
        other => Err(AppError::SchemaError(format!(
            "expected a top-level array, got {}",
            value_kind(&other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
