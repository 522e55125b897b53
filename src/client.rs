//! Core fetch trait and error types.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while fetching from an upstream provider.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Carries no URL: query strings hold provider API keys.
    #[error("HTTP error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.without_url())
    }
}

/// A single outbound GET request.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    /// Absolute URL, without the query string.
    pub url: String,
    /// Headers sent with this request only.
    pub headers: Vec<(String, String)>,
    /// Query parameters, in the order they are appended.
    pub query: Vec<(String, String)>,
    pub timeout: Duration,
}

impl FetchRequest {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            timeout,
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Look up a query parameter by name.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a header by name, case-insensitively.
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// Transport seam used by every provider client.
///
/// Implementations return the parsed JSON body verbatim on a 2xx response.
/// Schema checks are left to the caller.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn get_json(&self, request: FetchRequest) -> Result<Value, FetchError>;
}
