//! MCP tool servers for the weather and flight tool groups.

use rmcp::handler::server::{router::tool::ToolRouter, wrapper::Parameters};
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tracing::{info, warn};

use crate::flights::FlightService;
use crate::model::{FlightQuery, WeatherReport, DEFAULT_SORT};
use crate::tools::ToolError;
use crate::weather::WeatherService;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CityArgs {
    #[schemars(description = "Name of the city to get weather for")]
    pub city: String,
}

fn default_sort() -> String {
    DEFAULT_SORT.to_string()
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FlightArgs {
    #[schemars(description = "Origin entity id or city, as understood by the flight provider")]
    pub from_city: String,
    #[schemars(description = "Destination entity id or city, as understood by the flight provider")]
    pub to_city: String,
    #[schemars(description = "Departure date, YYYY-MM-DD")]
    pub depart_date: String,
    #[schemars(description = "Return date, YYYY-MM-DD")]
    pub return_date: String,
    #[schemars(description = "Number of adult passengers")]
    pub adults: u32,
    #[schemars(description = "Number of infant passengers")]
    pub infants: u32,
    #[serde(default = "default_sort")]
    #[schemars(description = "Result ordering, passed to the provider as-is")]
    pub sort: String,
}

impl From<FlightArgs> for FlightQuery {
    fn from(args: FlightArgs) -> Self {
        Self {
            from_city: args.from_city,
            to_city: args.to_city,
            depart_date: args.depart_date,
            return_date: args.return_date,
            adults: args.adults,
            infants: args.infants,
            sort: args.sort,
        }
    }
}

/// Tool failures are returned as error-flagged results, never as protocol errors.
fn error_result(tool: &str, err: ToolError) -> CallToolResult {
    warn!("{} failed: {}", tool, err);
    CallToolResult::structured_error(err.to_value())
}

fn report_result(
    tool: &str,
    result: Result<WeatherReport, ToolError>,
) -> Result<CallToolResult, McpError> {
    match result {
        Ok(report) => {
            let value = serde_json::to_value(report)
                .map_err(|e| McpError::internal_error(e.to_string(), None))?;
            Ok(CallToolResult::structured(value))
        }
        Err(err) => Ok(error_result(tool, err)),
    }
}

fn server_info(name: &str, instructions: &str) -> ServerInfo {
    ServerInfo {
        server_info: Implementation {
            name: name.into(),
            version: env!("CARGO_PKG_VERSION").into(),
            ..Default::default()
        },
        capabilities: ServerCapabilities::builder().enable_tools().build(),
        instructions: Some(instructions.into()),
        ..Default::default()
    }
}

#[derive(Clone)]
pub struct WeatherServer {
    weather: WeatherService,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WeatherServer {
    pub fn new(weather: WeatherService) -> Self {
        Self {
            weather,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Get current weather for a city. Returns display text and the raw provider payload.")]
    async fn get_current_location_weather(
        &self,
        Parameters(CityArgs { city }): Parameters<CityArgs>,
    ) -> Result<CallToolResult, McpError> {
        info!("get_current_location_weather({})", city);
        report_result("get_current_location_weather", self.weather.current(&city).await)
    }

    #[tool(description = "Get the daily weather forecast for a city. Returns display text and the raw provider payload.")]
    async fn get_location_forecast(
        &self,
        Parameters(CityArgs { city }): Parameters<CityArgs>,
    ) -> Result<CallToolResult, McpError> {
        info!("get_location_forecast({})", city);
        report_result("get_location_forecast", self.weather.forecast(&city).await)
    }
}

#[tool_handler]
impl ServerHandler for WeatherServer {
    fn get_info(&self) -> ServerInfo {
        server_info(
            "weather-server",
            "Current conditions and daily forecasts by city name.",
        )
    }
}

#[derive(Clone)]
pub struct FlightServer {
    flights: FlightService,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl FlightServer {
    pub fn new(flights: FlightService) -> Self {
        Self {
            flights,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Search round-trip flights and describe every leg of every itinerary as text.")]
    async fn get_flight_info(
        &self,
        Parameters(args): Parameters<FlightArgs>,
    ) -> Result<CallToolResult, McpError> {
        let query = FlightQuery::from(args);
        info!(
            "get_flight_info({} -> {}, {} / {})",
            query.from_city, query.to_city, query.depart_date, query.return_date
        );

        match self.flights.search(&query).await {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(err) => Ok(error_result("get_flight_info", err)),
        }
    }
}

#[tool_handler]
impl ServerHandler for FlightServer {
    fn get_info(&self) -> ServerInfo {
        server_info("flight-server", "Round-trip flight search.")
    }
}
