use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wayfarer::client::{Fetch, FetchError, FetchRequest};
use wayfarer::model::{FlightQuery, DEFAULT_SORT};
use wayfarer::options::TransportOptions;
use wayfarer::providers::{Endpoint, FlightSearchClient, TomorrowIoClient};
use wayfarer::tools::ToolError;
use wayfarer::{FlightService, WeatherService};

#[derive(Clone)]
struct MockFetcher {
    responses: Arc<Mutex<Vec<Result<Value, FetchError>>>>,
    requests: Arc<Mutex<Vec<FetchRequest>>>,
}

impl MockFetcher {
    fn new(responses: Vec<Result<Value, FetchError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn replying(payload: Value) -> Self {
        Self::new(vec![Ok(payload)])
    }

    fn last_request(&self) -> FetchRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl Fetch for MockFetcher {
    async fn get_json(&self, request: FetchRequest) -> Result<Value, FetchError> {
        self.requests.lock().unwrap().push(request);
        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            responses.remove(0)
        } else {
            Err(FetchError::InvalidRequest("No more mock responses".to_string()))
        }
    }
}

fn weather_service(fetcher: &MockFetcher) -> WeatherService {
    let endpoint = Endpoint::new("https://api.tomorrow.io/v4/weather", "weather-key");
    WeatherService::new(TomorrowIoClient::new(endpoint, Arc::new(fetcher.clone())))
}

fn flight_service(fetcher: &MockFetcher) -> FlightService {
    let endpoint = Endpoint::new(
        "https://flights-search3.p.rapidapi.com/flights/search-roundtrip",
        "rapid-key",
    );
    FlightService::new(FlightSearchClient::new(
        endpoint,
        "flights-search3.p.rapidapi.com",
        Arc::new(fetcher.clone()),
    ))
}

fn flight_query() -> FlightQuery {
    FlightQuery {
        from_city: "PARI".to_string(),
        to_city: "ROME".to_string(),
        depart_date: "2026-05-10".to_string(),
        return_date: "2026-05-17".to_string(),
        adults: 2,
        infants: 1,
        sort: DEFAULT_SORT.to_string(),
    }
}

fn leg(origin: &str, destination: &str, carriers: &[&str]) -> Value {
    json!({
        "origin": { "city": origin },
        "destination": { "city": destination },
        "departure": "2026-05-10T08:00:00",
        "arrival": "2026-05-10T10:05:00",
        "stopCount": 0,
        "carriers": {
            "marketing": carriers.iter().map(|name| json!({ "name": name })).collect::<Vec<_>>()
        }
    })
}

// --- current weather ---

#[tokio::test]
async fn test_current_weather_full_payload() {
    let payload = json!({
        "data": {
            "time": "2026-10-14T09:00:00Z",
            "values": {
                "temperature": 21.5,
                "weatherCode": 1101,
                "windSpeed": 3.2,
                "humidity": 64
            }
        },
        "location": { "name": "Paris, Île-de-France, France" }
    });
    let fetcher = MockFetcher::replying(payload.clone());

    let report = weather_service(&fetcher).current("Paris").await.unwrap();

    assert!(report.text.contains("Paris"));
    assert!(report.text.contains("21.5"));
    assert!(report.text.contains("Partly Cloudy"));
    assert!(report.text.contains("Wind Speed: 3.2 m/s."));
    assert!(report.text.contains("Humidity: 64%."));
    assert_eq!(report.raw, payload);
}

#[tokio::test]
async fn test_current_weather_missing_humidity() {
    let fetcher = MockFetcher::replying(json!({
        "data": { "values": { "temperature": 12, "weatherCode": 4001, "windSpeed": 7 } }
    }));

    let report = weather_service(&fetcher).current("Bergen").await.unwrap();

    assert!(report.text.contains("Humidity: N/A%."));
    assert!(report.text.contains("Rain"));
}

#[tokio::test]
async fn test_current_weather_missing_data() {
    let fetcher = MockFetcher::replying(json!({ "code": 400001, "message": "Invalid location" }));

    let err = weather_service(&fetcher).current("Atlantis").await.unwrap_err();

    assert_eq!(
        err,
        ToolError::MalformedResponse {
            missing_path: "data.values",
            raw: None
        }
    );
    assert_eq!(err.to_value()["error"]["kind"], "malformed_response");
}

#[tokio::test]
async fn test_current_weather_upstream_failure_is_soft() {
    let fetcher = MockFetcher::new(vec![Err(FetchError::HttpStatus {
        status: 401,
        body: r#"{"message":"unauthorized"}"#.to_string(),
    })]);

    let err = weather_service(&fetcher).current("Paris").await.unwrap_err();

    assert_eq!(err, ToolError::NoData { provider: "weather" });
}

#[tokio::test]
async fn test_realtime_request_shape() {
    let fetcher = MockFetcher::replying(json!({ "data": { "values": {} } }));

    weather_service(&fetcher).current("New York").await.unwrap();

    let request = fetcher.last_request();
    assert_eq!(request.url, "https://api.tomorrow.io/v4/weather/realtime");
    assert_eq!(request.query_value("location"), Some("New York"));
    assert_eq!(request.query_value("apikey"), Some("weather-key"));
    assert_eq!(request.header_value("Accept"), Some("application/json"));
    assert_eq!(request.timeout, Duration::from_secs(30));
}

// --- forecast ---

#[tokio::test]
async fn test_forecast_preserves_day_order() {
    let dates = ["2026-10-14", "2026-10-15", "2026-10-16", "2026-10-17", "2026-10-18"];
    let daily: Vec<Value> = dates
        .iter()
        .enumerate()
        .map(|(i, date)| {
            json!({
                "time": format!("{}T06:00:00Z", date),
                "values": {
                    "temperatureAvg": 10 + i,
                    "temperatureMax": 15 + i,
                    "temperatureMin": 5 + i,
                    "weatherCodeMax": 1000
                }
            })
        })
        .collect();
    let payload = json!({ "timelines": { "daily": daily } });
    let fetcher = MockFetcher::replying(payload.clone());

    let report = weather_service(&fetcher).forecast("Madrid").await.unwrap();

    assert!(report.text.starts_with("Weather forecast for Madrid:"));
    assert_eq!(report.text.matches("Date: ").count(), dates.len());
    let positions: Vec<usize> = dates
        .iter()
        .map(|date| report.text.find(date).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(report.text.contains("Max Temperature: 19°C"));
    assert_eq!(report.raw, payload);
}

#[tokio::test]
async fn test_forecast_blocks_are_blank_line_separated() {
    let fetcher = MockFetcher::replying(json!({
        "timelines": { "daily": [
            { "time": "d1", "values": { "weatherCodeMax": 5000 } },
            { "time": "d2", "values": {} }
        ]}
    }));

    let report = weather_service(&fetcher).forecast("Kyiv").await.unwrap();
    let blocks: Vec<&str> = report.text.split("\n\n").collect();

    assert_eq!(blocks.len(), 3);
    assert!(blocks[1].starts_with("Date: d1\nCondition: Snow"));
    assert!(blocks[2].starts_with("Date: d2\nCondition: Unknown"));
    assert!(blocks[2].contains("Average Temperature: N/A°C"));
}

#[tokio::test]
async fn test_forecast_missing_timeline() {
    let fetcher = MockFetcher::replying(json!({ "timelines": { "hourly": [] } }));

    let err = weather_service(&fetcher).forecast("Madrid").await.unwrap_err();

    assert_eq!(
        err,
        ToolError::MalformedResponse {
            missing_path: "timelines.daily",
            raw: None
        }
    );
}

#[tokio::test]
async fn test_forecast_request_shape() {
    let fetcher = MockFetcher::replying(json!({ "timelines": { "daily": [] } }));

    weather_service(&fetcher).forecast("Lima").await.unwrap();

    let request = fetcher.last_request();
    assert_eq!(request.url, "https://api.tomorrow.io/v4/weather/forecast");
    assert_eq!(request.query_value("location"), Some("Lima"));
    assert_eq!(request.query_value("timesteps"), Some("1d"));
}

// --- flights ---

#[tokio::test]
async fn test_flights_flatten_legs() {
    let fetcher = MockFetcher::replying(json!({
        "status": true,
        "data": { "itineraries": [
            {
                "price": { "formatted": "€120" },
                "legs": [ leg("Paris", "Rome", &["Air France"]) ]
            },
            {
                "price": { "formatted": "€185" },
                "legs": [
                    leg("Paris", "Milan", &["ITA Airways"]),
                    leg("Milan", "Rome", &["ITA Airways", "Alitalia"])
                ]
            }
        ]}
    }));

    let text = flight_service(&fetcher).search(&flight_query()).await.unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Flights from PARI to ROME (2026-05-10 -> 2026-05-17):");
    let legs = &lines[1..];
    assert_eq!(legs.len(), 3);
    assert!(legs[0].contains("Paris") && legs[0].contains("Rome") && legs[0].contains("€120"));
    assert!(legs[1].contains("Paris") && legs[1].contains("Milan") && legs[1].contains("€185"));
    assert!(legs[2].contains("Milan") && legs[2].contains("Rome"));
    assert!(legs[2].contains("Airlines: ITA Airways, Alitalia"));
}

#[tokio::test]
async fn test_flights_empty_carrier_list_renders_empty() {
    let fetcher = MockFetcher::replying(json!({
        "data": { "itineraries": [ { "legs": [ leg("Oslo", "Bergen", &[]) ] } ] }
    }));

    let text = flight_service(&fetcher).search(&flight_query()).await.unwrap();

    assert!(text.contains("| Airlines:  | Price: N/A"));
    assert!(!text.contains("Airlines: N/A"));
}

#[tokio::test]
async fn test_flights_missing_itineraries_embeds_raw() {
    let fetcher = MockFetcher::replying(json!({ "status": false, "message": "Too many requests" }));

    let err = flight_service(&fetcher).search(&flight_query()).await.unwrap_err();
    let message = err.to_string();

    assert!(message.contains("data.itineraries"));
    assert!(message.contains("Too many requests"));
}

#[tokio::test]
async fn test_flights_upstream_failure_is_soft() {
    let fetcher = MockFetcher::new(vec![Err(FetchError::InvalidRequest("timeout".to_string()))]);

    let err = flight_service(&fetcher).search(&flight_query()).await.unwrap_err();

    assert_eq!(err, ToolError::NoData { provider: "flight" });
    assert_eq!(
        err.to_value(),
        json!({ "error": { "kind": "no_data", "message": "No data returned from the flight API" } })
    );
}

#[tokio::test]
async fn test_flight_request_shape() {
    let fetcher = MockFetcher::replying(json!({ "data": { "itineraries": [] } }));
    let mut query = flight_query();
    query.sort = "fastest_first".to_string();

    let text = flight_service(&fetcher).search(&query).await.unwrap();
    assert!(text.ends_with("No flights found."));

    let request = fetcher.last_request();
    assert_eq!(
        request.url,
        "https://flights-search3.p.rapidapi.com/flights/search-roundtrip"
    );
    assert_eq!(request.header_value("x-rapidapi-key"), Some("rapid-key"));
    assert_eq!(
        request.header_value("x-rapidapi-host"),
        Some("flights-search3.p.rapidapi.com")
    );
    assert_eq!(request.query_value("fromEntityId"), Some("PARI"));
    assert_eq!(request.query_value("toEntityId"), Some("ROME"));
    assert_eq!(request.query_value("departDate"), Some("2026-05-10"));
    assert_eq!(request.query_value("returnDate"), Some("2026-05-17"));
    assert_eq!(request.query_value("adults"), Some("2"));
    assert_eq!(request.query_value("infants"), Some("1"));
    assert_eq!(request.query_value("sort"), Some("fastest_first"));
    assert_eq!(request.timeout, Duration::from_secs(60));
}

#[tokio::test]
async fn test_transport_timeout_overrides_default() {
    let fetcher = MockFetcher::replying(json!({ "data": { "itineraries": [] } }));
    let client = FlightSearchClient::with_options(
        Endpoint::new("https://flights.example.com/search", "k"),
        "flights.example.com",
        Arc::new(fetcher.clone()),
        TransportOptions::new().with_timeout(Duration::from_secs(5)),
    );

    FlightService::new(client).search(&flight_query()).await.unwrap();

    assert_eq!(fetcher.last_request().timeout, Duration::from_secs(5));
}
