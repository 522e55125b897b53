//! Current-conditions and daily-forecast formatting.

use itertools::Itertools;

use crate::api::tomorrow_io::{parse_daily_forecast, parse_realtime};
use crate::model::{ForecastDay, WeatherReading, WeatherReport};
use crate::providers::TomorrowIoClient;
use crate::tools::ToolError;
use crate::weather_code::condition_for_code;

const PROVIDER: &str = "weather";

/// Weather lookups for a city.
#[derive(Clone)]
pub struct WeatherService {
    client: TomorrowIoClient,
}

impl WeatherService {
    pub fn new(client: TomorrowIoClient) -> Self {
        Self { client }
    }

    /// Current conditions in `city`.
    pub async fn current(&self, city: &str) -> Result<WeatherReport, ToolError> {
        let raw = self
            .client
            .realtime(city)
            .await
            .map_err(|_| ToolError::NoData { provider: PROVIDER })?;

        let reading = parse_realtime(&raw)?;
        Ok(WeatherReport {
            text: render_current(city, &reading),
            raw,
        })
    }

    /// Daily forecast for `city`.
    pub async fn forecast(&self, city: &str) -> Result<WeatherReport, ToolError> {
        let raw = self
            .client
            .forecast(city)
            .await
            .map_err(|_| ToolError::NoData { provider: PROVIDER })?;

        let days = parse_daily_forecast(&raw)?;
        Ok(WeatherReport {
            text: render_forecast(city, &days),
            raw,
        })
    }
}

pub fn render_current(city: &str, reading: &WeatherReading) -> String {
    format!(
        "The current weather in {} is {}.\nTemperature: {}°C.\nWind Speed: {} m/s.\nHumidity: {}%.",
        city,
        condition_for_code(reading.condition_code),
        reading.temperature_c,
        reading.wind_speed_ms,
        reading.humidity_pct,
    )
}

fn render_day(day: &ForecastDay) -> String {
    format!(
        "Date: {}\nCondition: {}\nAverage Temperature: {}°C\nMax Temperature: {}°C\nMin Temperature: {}°C",
        day.date,
        condition_for_code(day.condition_code),
        day.temp_avg_c,
        day.temp_max_c,
        day.temp_min_c,
    )
}

/// Header followed by one block per day, blank-line separated.
pub fn render_forecast(city: &str, days: &[ForecastDay]) -> String {
    let header = format!("Weather forecast for {}:", city);
    if days.is_empty() {
        return format!("{}\n\nNo forecast data available.", header);
    }
    format!("{}\n\n{}", header, days.iter().map(render_day).join("\n\n"))
}
