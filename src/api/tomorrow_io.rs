//! Tomorrow.io response shapes.

use serde_json::Value;

use crate::api::{lookup, text_or_na};
use crate::model::{ForecastDay, Measurement, WeatherReading};
use crate::tools::ToolError;

pub const REALTIME_VALUES: &str = "data.values";
pub const DAILY_TIMELINE: &str = "timelines.daily";

/// Codes may arrive as integral floats (`1000.0`); fractional values are
/// skipped.
fn weather_code(values: &Value, keys: &[&str]) -> i64 {
    keys.iter()
        .find_map(|key| values.get(*key).and_then(integral))
        .unwrap_or(0)
}

fn integral(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Parse a `/realtime` payload.
pub fn parse_realtime(payload: &Value) -> Result<WeatherReading, ToolError> {
    let values = lookup(payload, REALTIME_VALUES).ok_or(ToolError::MalformedResponse {
        missing_path: REALTIME_VALUES,
        raw: None,
    })?;

    Ok(WeatherReading {
        temperature_c: Measurement::from_field(values.get("temperature")),
        wind_speed_ms: Measurement::from_field(values.get("windSpeed")),
        humidity_pct: Measurement::from_field(values.get("humidity")),
        condition_code: weather_code(values, &["weatherCode"]),
    })
}

/// Parse a `/forecast` payload into its daily entries, in upstream order.
pub fn parse_daily_forecast(payload: &Value) -> Result<Vec<ForecastDay>, ToolError> {
    let days = lookup(payload, DAILY_TIMELINE)
        .and_then(Value::as_array)
        .ok_or(ToolError::MalformedResponse {
            missing_path: DAILY_TIMELINE,
            raw: None,
        })?;

    Ok(days.iter().map(parse_day).collect())
}

fn parse_day(day: &Value) -> ForecastDay {
    let values = day.get("values").unwrap_or(&Value::Null);
    ForecastDay {
        date: text_or_na(day, "time"),
        temp_avg_c: Measurement::from_field(values.get("temperatureAvg")),
        temp_max_c: Measurement::from_field(values.get("temperatureMax")),
        temp_min_c: Measurement::from_field(values.get("temperatureMin")),
        condition_code: weather_code(values, &["weatherCodeMax", "weatherCode"]),
    }
}
