//! Extraction of typed values from provider JSON payloads.
//!
//! Field-level absence falls back to a sentinel. A missing structural path
//! (the object that holds the fields) is reported as
//! [`ToolError::MalformedResponse`](crate::tools::ToolError::MalformedResponse).

pub mod flight_search;
pub mod tomorrow_io;

use serde_json::Value;

use crate::model::NOT_AVAILABLE;

/// Follow a dotted path of object keys.
pub(crate) fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, key| current.get(key))
        .filter(|found| !found.is_null())
}

/// String at `path`, or `"N/A"`. Numbers are rendered as written.
pub(crate) fn text_or_na(value: &Value, path: &str) -> String {
    match lookup(value, path) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
