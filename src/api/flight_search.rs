//! Flight-search response shapes.

use serde_json::Value;

use crate::api::{lookup, text_or_na};
use crate::model::{Itinerary, Leg};
use crate::tools::ToolError;

pub const ITINERARIES: &str = "data.itineraries";

/// Parse the itineraries of a search payload.
///
/// A missing `data.itineraries` keeps the whole payload in the error so the
/// caller can see what the provider answered instead.
pub fn parse_itineraries(payload: &Value) -> Result<Vec<Itinerary>, ToolError> {
    let itineraries = lookup(payload, ITINERARIES)
        .and_then(Value::as_array)
        .ok_or_else(|| ToolError::MalformedResponse {
            missing_path: ITINERARIES,
            raw: Some(payload.clone()),
        })?;

    Ok(itineraries.iter().map(parse_itinerary).collect())
}

fn parse_itinerary(itinerary: &Value) -> Itinerary {
    let legs = itinerary
        .get("legs")
        .and_then(Value::as_array)
        .map(|legs| legs.iter().map(parse_leg).collect())
        .unwrap_or_default();

    Itinerary {
        price: text_or_na(itinerary, "price.formatted"),
        legs,
    }
}

fn parse_leg(leg: &Value) -> Leg {
    let carriers = lookup(leg, "carriers.marketing")
        .and_then(Value::as_array)
        .map(|marketing| {
            marketing
                .iter()
                .filter_map(|carrier| carrier.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Leg {
        origin_city: text_or_na(leg, "origin.city"),
        destination_city: text_or_na(leg, "destination.city"),
        departure: text_or_na(leg, "departure"),
        arrival: text_or_na(leg, "arrival"),
        stop_count: leg
            .get("stopCount")
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0),
        carriers,
    }
}
