//! Upstream provider clients.

pub mod flight_search;
pub mod tomorrow_io;

/// Base URL and credential of one provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub base_url: String,
    pub api_key: String,
}

impl Endpoint {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Join `path` onto the base URL with exactly one separating slash.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

pub use flight_search::FlightSearchClient;
pub use tomorrow_io::TomorrowIoClient;
