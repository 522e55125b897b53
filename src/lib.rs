//! # wayfarer - weather and flight tools for agents
//!
//! Exposes two tool groups over the Model Context Protocol so an LLM-driven
//! assistant can call them:
//!
//! - **weather** (`/weather`): `get_current_location_weather`, `get_location_forecast`
//! - **flight** (`/flight`): `get_flight_info`
//!
//! ## Architecture
//!
//! 1. **Providers** turn a plain identifier (a city, a route) into a single
//!    [`FetchRequest`] against the upstream REST API.
//! 2. A [`Fetch`] implementation sends it and returns the JSON body or a
//!    [`FetchError`]. [`HttpFetcher`] is the `reqwest`-backed one.
//! 3. The `api` module extracts typed values, falling back to `N/A`
//!    sentinels for missing fields.
//! 4. Services render display text. Failures become a [`ToolError`], which
//!    the MCP layer returns to the caller as a value.
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use wayfarer::providers::{Endpoint, TomorrowIoClient};
//! use wayfarer::{HttpFetcher, TransportOptions, WeatherService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = Arc::new(HttpFetcher::new(TransportOptions::new())?);
//!     let endpoint = Endpoint::new("https://api.tomorrow.io/v4/weather", "your-api-key");
//!     let weather = WeatherService::new(TomorrowIoClient::new(endpoint, fetcher));
//!
//!     match weather.current("Paris").await {
//!         Ok(report) => println!("{}", report.text),
//!         Err(e) => println!("{}", e.to_value()),
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod flights;
pub mod http;
pub mod mcp;
pub mod model;
pub mod options;
pub mod providers;
pub mod server;
pub mod tools;
pub mod weather;
pub mod weather_code;

pub use client::{Fetch, FetchError, FetchRequest};
pub use config::{ConfigError, ServerConfig};
pub use flights::FlightService;
pub use http::HttpFetcher;
pub use mcp::{FlightServer, WeatherServer};
pub use model::{FlightQuery, Itinerary, Leg, WeatherReport};
pub use options::TransportOptions;
pub use tools::ToolError;
pub use weather::WeatherService;

// Re-export rmcp for convenience
pub use rmcp;
