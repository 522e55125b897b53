//! RapidAPI flight-search client.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::client::{Fetch, FetchError, FetchRequest};
use crate::model::FlightQuery;
use crate::options::TransportOptions;
use crate::providers::Endpoint;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_HOST: &str = "flights-search3.p.rapidapi.com";

/// Client for the keyed flight-search endpoint.
#[derive(Clone)]
pub struct FlightSearchClient {
    endpoint: Endpoint,
    host: String,
    fetcher: Arc<dyn Fetch>,
    transport_options: TransportOptions,
}

impl FlightSearchClient {
    pub fn new(endpoint: Endpoint, host: impl Into<String>, fetcher: Arc<dyn Fetch>) -> Self {
        Self::with_options(endpoint, host, fetcher, TransportOptions::default())
    }

    pub fn with_options(
        endpoint: Endpoint,
        host: impl Into<String>,
        fetcher: Arc<dyn Fetch>,
        transport_options: TransportOptions,
    ) -> Self {
        Self {
            endpoint,
            host: host.into(),
            fetcher,
            transport_options,
        }
    }

    fn request(&self, query: &FlightQuery) -> FetchRequest {
        FetchRequest::new(
            self.endpoint.base_url.clone(),
            self.transport_options.timeout_or(DEFAULT_TIMEOUT),
        )
        .header("x-rapidapi-key", &self.endpoint.api_key)
        .header("x-rapidapi-host", &self.host)
        .query("fromEntityId", &query.from_city)
        .query("toEntityId", &query.to_city)
        .query("departDate", &query.depart_date)
        .query("returnDate", &query.return_date)
        .query("adults", query.adults)
        .query("infants", query.infants)
        .query("sort", &query.sort)
    }

    pub async fn search(&self, query: &FlightQuery) -> Result<Value, FetchError> {
        self.fetcher.get_json(self.request(query)).await
    }
}
