//! Caller-visible tool errors.

use serde_json::{json, Value};

/// Error returned by a tool instead of a fault.
///
/// Every variant is reported to the caller as a tagged value; see
/// [`ToolError::to_value`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ToolError {
    #[error("No data returned from the {provider} API")]
    NoData { provider: &'static str },

    #[error("Unexpected API response structure: missing `{missing_path}`{}", raw_suffix(.raw))]
    MalformedResponse {
        missing_path: &'static str,
        /// Upstream payload, kept when the caller benefits from seeing it.
        raw: Option<Value>,
    },
}

fn raw_suffix(raw: &Option<Value>) -> String {
    match raw {
        Some(raw) => format!(" in response: {}", raw),
        None => String::new(),
    }
}

impl ToolError {
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::NoData { .. } => "no_data",
            ToolError::MalformedResponse { .. } => "malformed_response",
        }
    }

    /// `{"error": {"kind": ..., "message": ...}}`
    pub fn to_value(&self) -> Value {
        json!({
            "error": {
                "kind": self.kind(),
                "message": self.to_string(),
            }
        })
    }
}
