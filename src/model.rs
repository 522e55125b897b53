//! Transient value shapes extracted from provider responses.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Display value used for any field the provider did not send.
pub const NOT_AVAILABLE: &str = "N/A";

/// A numeric reading that may be missing from the upstream payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Measurement {
    Known(Number),
    NotAvailable,
}

impl Measurement {
    /// Read a numeric field, treating absent, null or non-numeric values as
    /// [`Measurement::NotAvailable`].
    pub fn from_field(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Number(n)) => Measurement::Known(n.clone()),
            _ => Measurement::NotAvailable,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Known(n) => write!(f, "{}", n),
            Measurement::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

/// Current conditions for one location.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub temperature_c: Measurement,
    pub wind_speed_ms: Measurement,
    pub humidity_pct: Measurement,
    pub condition_code: i64,
}

/// One entry of a daily forecast timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: String,
    pub temp_avg_c: Measurement,
    pub temp_max_c: Measurement,
    pub temp_min_c: Measurement,
    pub condition_code: i64,
}

/// Success payload of the weather tools: display text plus the untouched
/// provider response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub text: String,
    pub raw: Value,
}

pub const DEFAULT_SORT: &str = "cheapest_first";

/// Parameters of a round-trip flight search.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightQuery {
    pub from_city: String,
    pub to_city: String,
    pub depart_date: String,
    pub return_date: String,
    pub adults: u32,
    pub infants: u32,
    /// Passed to the provider verbatim.
    pub sort: String,
}

/// One flight-search result.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub price: String,
    pub legs: Vec<Leg>,
}

/// One origin-to-destination hop within an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub origin_city: String,
    pub destination_city: String,
    /// Timestamps are kept as the provider sent them.
    pub departure: String,
    pub arrival: String,
    pub stop_count: u32,
    pub carriers: Vec<String>,
}
