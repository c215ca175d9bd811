use crate::config::ProviderConfig;
use crate::error::AppError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Shown in the empty search field; never a valid query
pub const PLACEHOLDER: &str = "Enter city name...";

/// A trimmed, non-empty city or location name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed == PLACEHOLDER {
            return Err(AppError::invalid_input("Please enter a city name!"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The decoded provider body, parsed section by section later on
#[derive(Debug, Clone, PartialEq)]
pub struct RawWeatherDocument(pub Value);

// Parsed data, all values kept exactly as the provider sent them
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub temp_c: String,
    pub feels_like_c: String,
    pub description: String,
    pub wind_speed_kmph: String,
    pub wind_dir_compass: String,
    pub wind_dir_degree: String,
    pub humidity: String,
    pub pressure_mb: String,
    pub visibility_km: String,
    pub cloud_cover: String,
    pub precip_mm: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationInfo {
    pub area_name: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: String,
    pub min_temp_c: String,
    pub max_temp_c: String,
    pub description: String,
    pub chance_of_rain: String,
    pub uv_index: String,
    pub sunrise: String,
    pub sunset: String,
}

// wttr.in `format=j1` wire structures
#[derive(Debug, Deserialize)]
struct TextValue {
    value: String,
}

#[derive(Debug, Deserialize)]
struct CurrentCondition {
    #[serde(rename = "temp_C")]
    temp_c: String,
    #[serde(rename = "FeelsLikeC")]
    feels_like_c: String,
    #[serde(rename = "weatherDesc")]
    weather_desc: Vec<TextValue>,
    #[serde(rename = "windspeedKmph")]
    windspeed_kmph: String,
    #[serde(rename = "winddir16Point")]
    winddir_16_point: String,
    #[serde(rename = "winddirDegree")]
    winddir_degree: String,
    humidity: String,
    pressure: String,
    visibility: String,
    cloudcover: String,
    #[serde(rename = "precipMM")]
    precip_mm: String,
}

#[derive(Debug, Deserialize)]
struct NearestArea {
    #[serde(rename = "areaName")]
    area_name: Vec<TextValue>,
    country: Vec<TextValue>,
}

#[derive(Debug, Deserialize)]
struct DailyForecast {
    date: String,
    #[serde(rename = "maxtempC")]
    max_temp_c: String,
    #[serde(rename = "mintempC")]
    min_temp_c: String,
    #[serde(rename = "uvIndex")]
    uv_index: String,
    astronomy: Vec<Astronomy>,
    hourly: Vec<HourlyForecast>,
}

#[derive(Debug, Deserialize)]
struct Astronomy {
    sunrise: String,
    sunset: String,
}

#[derive(Debug, Deserialize)]
struct HourlyForecast {
    chanceofrain: String,
    #[serde(rename = "weatherDesc")]
    weather_desc: Vec<TextValue>,
}

fn section<'a>(doc: &'a Value, key: &str, index: usize) -> Result<&'a Value, AppError> {
    doc.get(key)
        .and_then(|entries| entries.get(index))
        .ok_or_else(|| AppError::parse(format!("missing `{key}[{index}]`")))
}

fn decode<T: DeserializeOwned>(value: &Value, what: &str) -> Result<T, AppError> {
    T::deserialize(value).map_err(|e| AppError::parse(format!("{what}: {e}")))
}

fn first_value(values: &[TextValue], what: &str) -> Result<String, AppError> {
    values
        .first()
        .map(|v| v.value.clone())
        .ok_or_else(|| AppError::parse(format!("`{what}` is empty")))
}

/// Current conditions and the resolved location; both must be present
pub fn parse_current(doc: &RawWeatherDocument) -> Result<(WeatherSnapshot, LocationInfo), AppError> {
    let current: CurrentCondition =
        decode(section(&doc.0, "current_condition", 0)?, "current_condition")?;
    let area: NearestArea = decode(section(&doc.0, "nearest_area", 0)?, "nearest_area")?;

    let snapshot = WeatherSnapshot {
        description: first_value(&current.weather_desc, "weatherDesc")?,
        temp_c: current.temp_c,
        feels_like_c: current.feels_like_c,
        wind_speed_kmph: current.windspeed_kmph,
        wind_dir_compass: current.winddir_16_point,
        wind_dir_degree: current.winddir_degree,
        humidity: current.humidity,
        pressure_mb: current.pressure,
        visibility_km: current.visibility,
        cloud_cover: current.cloudcover,
        precip_mm: current.precip_mm,
    };
    let location = LocationInfo {
        area_name: first_value(&area.area_name, "areaName")?,
        country: first_value(&area.country, "country")?,
    };

    Ok((snapshot, location))
}

/// Tomorrow's forecast (`weather[1]`), sampled at one hourly slot
pub fn parse_tomorrow(doc: &RawWeatherDocument, hour_index: usize) -> Result<ForecastDay, AppError> {
    let day: DailyForecast = decode(section(&doc.0, "weather", 1)?, "weather[1]")?;

    let hour = day
        .hourly
        .get(hour_index)
        .ok_or_else(|| AppError::parse(format!("missing `hourly[{hour_index}]`")))?;
    let astronomy = day
        .astronomy
        .first()
        .ok_or_else(|| AppError::parse("missing `astronomy[0]`"))?;

    Ok(ForecastDay {
        description: first_value(&hour.weather_desc, "weatherDesc")?,
        chance_of_rain: hour.chanceofrain.clone(),
        sunrise: astronomy.sunrise.clone(),
        sunset: astronomy.sunset.clone(),
        date: day.date,
        min_temp_c: day.min_temp_c,
        max_temp_c: day.max_temp_c,
        uv_index: day.uv_index,
    })
}

/// HTTP client for the wttr.in service
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    config: ProviderConfig,
}

impl WeatherClient {
    pub fn new(config: ProviderConfig) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn url_for(&self, query: &SearchQuery) -> String {
        format!(
            "{}/{}?format={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(query.as_str()),
            self.config.format
        )
    }

    pub async fn fetch(&self, query: &SearchQuery) -> Result<RawWeatherDocument, AppError> {
        let url = self.url_for(query);
        tracing::debug!("Fetching weather from: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.describe(e))?;

        let status = response.status();
        tracing::debug!("Got response with status: {}", status);
        if !status.is_success() {
            return Err(AppError::fetch(format!("Error fetching weather: {status}")));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| self.describe(e))?;
        Ok(RawWeatherDocument(body))
    }

    fn describe(&self, err: reqwest::Error) -> AppError {
        if err.is_timeout() {
            AppError::fetch(format!(
                "Request timed out after {} seconds",
                self.config.timeout_seconds
            ))
        } else if err.is_decode() {
            AppError::fetch(format!("Invalid response body: {err}"))
        } else {
            AppError::fetch(err.to_string())
        }
    }
}

// Owned arguments so the future can be handed to the executor
pub async fn fetch_weather(
    client: WeatherClient,
    query: SearchQuery,
) -> Result<RawWeatherDocument, AppError> {
    client.fetch(&query).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answers the first connection with `response`, after an optional stall
    async fn serve_once(response: String, stall: std::time::Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                tokio::time::sleep(stall).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}")
    }

    fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    fn client_for(base_url: String, timeout_seconds: u64) -> WeatherClient {
        WeatherClient::new(ProviderConfig {
            base_url,
            timeout_seconds,
            ..ProviderConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn query_is_trimmed() {
        let query = SearchQuery::parse("  London \n").unwrap();
        assert_eq!(query.as_str(), "London");
    }

    #[test]
    fn empty_and_placeholder_queries_are_rejected() {
        for input in ["", "   ", PLACEHOLDER, "  Enter city name...  "] {
            let err = SearchQuery::parse(input).unwrap_err();
            assert!(matches!(err, AppError::InvalidInput { .. }), "{input:?}");
        }
    }

    #[test]
    fn url_encodes_the_query() {
        let client = WeatherClient::new(ProviderConfig::default()).unwrap();
        let query = SearchQuery::parse("New York").unwrap();
        assert_eq!(client.url_for(&query), "https://wttr.in/New%20York?format=j1");
    }

    #[test]
    fn parses_current_conditions_and_location() {
        let doc = fixtures::london();
        let (snapshot, location) = parse_current(&doc).unwrap();

        assert_eq!(snapshot.temp_c, "15");
        assert_eq!(snapshot.feels_like_c, "13");
        assert_eq!(snapshot.description, "Partly cloudy");
        assert_eq!(snapshot.wind_dir_compass, "WSW");
        assert_eq!(snapshot.precip_mm, "0.1");
        assert_eq!(location.area_name, "London");
        assert_eq!(location.country, "United Kingdom");
    }

    #[test]
    fn missing_current_condition_is_a_parse_error() {
        let mut doc = fixtures::london();
        doc.0.as_object_mut().unwrap().remove("current_condition");
        let err = parse_current(&doc).unwrap_err();
        assert!(matches!(err, AppError::Parse { .. }));
        assert!(err.to_string().contains("current_condition"));
    }

    #[test]
    fn wrongly_typed_field_is_a_parse_error() {
        let mut doc = fixtures::london();
        doc.0["current_condition"][0]["humidity"] = serde_json::json!(72);
        assert!(matches!(parse_current(&doc), Err(AppError::Parse { .. })));
    }

    #[test]
    fn parses_tomorrow_at_the_sampled_hour() {
        let doc = fixtures::london();
        let day = parse_tomorrow(&doc, 4).unwrap();

        assert_eq!(day.date, "2024-05-02");
        assert_eq!(day.max_temp_c, "18");
        assert_eq!(day.min_temp_c, "9");
        assert_eq!(day.description, "Light rain shower");
        assert_eq!(day.chance_of_rain, "80");
        assert_eq!(day.sunrise, "05:29 AM");
        assert_eq!(day.uv_index, "4");
    }

    #[test]
    fn single_day_forecast_has_no_tomorrow() {
        let mut doc = fixtures::london();
        doc.0["weather"].as_array_mut().unwrap().truncate(1);
        assert!(matches!(parse_tomorrow(&doc, 4), Err(AppError::Parse { .. })));
    }

    #[test]
    fn short_hourly_list_has_no_sample() {
        let doc = fixtures::london();
        assert!(parse_tomorrow(&doc, 7).is_err());
    }

    #[tokio::test]
    async fn fetch_decodes_json_body() {
        let body = fixtures::london().0.to_string();
        let base = serve_once(http_response("200 OK", &body), Default::default()).await;
        let client = client_for(base, 5);

        let doc = client
            .fetch(&SearchQuery::parse("London").unwrap())
            .await
            .unwrap();
        assert_eq!(doc.0["current_condition"][0]["temp_C"], "15");
    }

    #[tokio::test]
    async fn fetch_reports_error_status() {
        let base = serve_once(http_response("404 Not Found", "{}"), Default::default()).await;
        let client = client_for(base, 5);

        let err = fetch_weather(client, SearchQuery::parse("Atlantis").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Fetch { .. }));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn fetch_reports_malformed_body() {
        let base = serve_once(
            http_response("200 OK", "Unknown location; please try ~1.0,2.0"),
            Default::default(),
        )
        .await;
        let client = client_for(base, 5);

        let err = client
            .fetch(&SearchQuery::parse("Nowhere").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Fetch { .. }));
    }

    #[tokio::test]
    async fn fetch_times_out() {
        let base = serve_once(
            http_response("200 OK", "{}"),
            std::time::Duration::from_secs(5),
        )
        .await;
        let client = client_for(base, 1);

        let err = client
            .fetch(&SearchQuery::parse("Slowtown").unwrap())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AppError::fetch("Request timed out after 1 seconds")
        );
    }

    #[tokio::test]
    async fn fetch_reports_connection_failure() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{addr}"), 2);
        let err = client
            .fetch(&SearchQuery::parse("London").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Fetch { .. }));
    }
}
