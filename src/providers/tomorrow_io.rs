//! Tomorrow.io weather API client.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::client::{Fetch, FetchError, FetchRequest};
use crate::options::TransportOptions;
use crate::providers::Endpoint;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the `/realtime` and `/forecast` endpoints.
#[derive(Clone)]
pub struct TomorrowIoClient {
    endpoint: Endpoint,
    fetcher: Arc<dyn Fetch>,
    transport_options: TransportOptions,
}

impl TomorrowIoClient {
    pub fn new(endpoint: Endpoint, fetcher: Arc<dyn Fetch>) -> Self {
        Self::with_options(endpoint, fetcher, TransportOptions::default())
    }

    pub fn with_options(
        endpoint: Endpoint,
        fetcher: Arc<dyn Fetch>,
        transport_options: TransportOptions,
    ) -> Self {
        Self {
            endpoint,
            fetcher,
            transport_options,
        }
    }

    fn request(&self, path: &str, city: &str) -> FetchRequest {
        FetchRequest::new(
            self.endpoint.url(path),
            self.transport_options.timeout_or(DEFAULT_TIMEOUT),
        )
        .header("accept", "application/json")
        .query("location", city)
        .query("apikey", &self.endpoint.api_key)
    }

    /// Current conditions for `city`.
    pub async fn realtime(&self, city: &str) -> Result<Value, FetchError> {
        self.fetcher.get_json(self.request("realtime", city)).await
    }

    /// Daily forecast timeline for `city`.
    pub async fn forecast(&self, city: &str) -> Result<Value, FetchError> {
        let request = self.request("forecast", city).query("timesteps", "1d");
        self.fetcher.get_json(request).await
    }
}
