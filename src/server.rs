//! HTTP hosting of the MCP tool servers.

use std::sync::Arc;

use axum::Router;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
};
use tower_http::cors::CorsLayer;

use crate::client::Fetch;
use crate::config::ServerConfig;
use crate::flights::FlightService;
use crate::mcp::{FlightServer, WeatherServer};
use crate::providers::{FlightSearchClient, TomorrowIoClient};
use crate::weather::WeatherService;

/// Every request is served on its own; no MCP session state is kept.
fn stateless() -> StreamableHttpServerConfig {
    StreamableHttpServerConfig {
        stateful_mode: false,
        ..Default::default()
    }
}

/// Build the application router: weather tools under `/weather`, flight
/// tools under `/flight`, with permissive CORS on both.
pub fn router(config: &ServerConfig, fetcher: Arc<dyn Fetch>) -> Router {
    let weather = WeatherService::new(TomorrowIoClient::with_options(
        config.weather.clone(),
        fetcher.clone(),
        config.transport_options(),
    ));
    let flights = FlightService::new(FlightSearchClient::with_options(
        config.flights.clone(),
        config.flights_host.clone(),
        fetcher,
        config.transport_options(),
    ));

    let weather_mcp = StreamableHttpService::new(
        move || Ok(WeatherServer::new(weather.clone())),
        LocalSessionManager::default().into(),
        stateless(),
    );
    let flight_mcp = StreamableHttpService::new(
        move || Ok(FlightServer::new(flights.clone())),
        LocalSessionManager::default().into(),
        stateless(),
    );

    Router::new()
        .nest_service("/weather", weather_mcp)
        .nest_service("/flight", flight_mcp)
        .layer(CorsLayer::permissive())
}
