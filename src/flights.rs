//! Flight-search formatting.

use itertools::Itertools;

use crate::api::flight_search::parse_itineraries;
use crate::model::{FlightQuery, Itinerary, Leg};
use crate::providers::FlightSearchClient;
use crate::tools::ToolError;

const PROVIDER: &str = "flight";

#[derive(Clone)]
pub struct FlightService {
    client: FlightSearchClient,
}

impl FlightService {
    pub fn new(client: FlightSearchClient) -> Self {
        Self { client }
    }

    /// Search round-trip flights and render every leg of every itinerary.
    pub async fn search(&self, query: &FlightQuery) -> Result<String, ToolError> {
        let raw = self
            .client
            .search(query)
            .await
            .map_err(|_| ToolError::NoData { provider: PROVIDER })?;

        let itineraries = parse_itineraries(&raw)?;
        Ok(render_itineraries(query, &itineraries))
    }
}

fn render_leg(leg: &Leg, price: &str) -> String {
    format!(
        "{} -> {} | Departure: {} | Arrival: {} | Stops: {} | Airlines: {} | Price: {}",
        leg.origin_city,
        leg.destination_city,
        leg.departure,
        leg.arrival,
        leg.stop_count,
        leg.carriers.iter().join(", "),
        price,
    )
}

/// Route header line, then one line per leg across all itineraries.
pub fn render_itineraries(query: &FlightQuery, itineraries: &[Itinerary]) -> String {
    let header = format!(
        "Flights from {} to {} ({} -> {}):",
        query.from_city, query.to_city, query.depart_date, query.return_date
    );

    let lines: Vec<String> = itineraries
        .iter()
        .flat_map(|itinerary| {
            itinerary
                .legs
                .iter()
                .map(|leg| render_leg(leg, &itinerary.price))
        })
        .collect();

    if lines.is_empty() {
        return format!("{}\nNo flights found.", header);
    }
    format!("{}\n{}", header, lines.join("\n"))
}
