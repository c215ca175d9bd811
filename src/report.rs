//! The mounted result: every label the result panel shows for one search.
//!
//! A `Report` is built in one go from parsed provider data and replaced as
//! a whole on the next search. `components` turns it into widgets.

use crate::error::AppError;
use crate::icons::{icon_for, Pictogram};
use crate::weather::{
    self, ForecastDay, LocationInfo, RawWeatherDocument, WeatherSnapshot,
};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub location: String,
    pub current: CurrentBlock,
    pub wind: Highlight,
    pub humidity: Highlight,
    /// Pressure, visibility, cloud cover, precipitation; shown 2×2
    pub details: [Detail; 4],
    pub tomorrow: Option<TomorrowBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentBlock {
    pub pictogram: Pictogram,
    pub temperature: String,
    pub feels_like: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub label: &'static str,
    pub value: String,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TomorrowBlock {
    pub date: String,
    pub pictogram: Pictogram,
    pub description: String,
    pub max_temp: String,
    pub min_temp: String,
    pub sunrise: String,
    pub sunset: String,
    pub chance_of_rain: String,
    pub uv_index: String,
}

/// Drops a mounted report. Always called before a replacement is built.
pub fn teardown(previous: Option<Report>) {
    if let Some(report) = previous {
        tracing::debug!("Unmounting result for {}", report.location);
    }
}

/// "2024-05-02" reads as "Thursday, 02 May 2024"; anything else is shown raw
fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(day) => day.format("%A, %d %B %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

fn tomorrow_block(day: &ForecastDay) -> TomorrowBlock {
    TomorrowBlock {
        date: format_date(&day.date),
        pictogram: icon_for(&day.description),
        description: day.description.clone(),
        max_temp: format!("Max: {}°C", day.max_temp_c),
        min_temp: format!("Min: {}°C", day.min_temp_c),
        sunrise: format!("Sunrise: {}", day.sunrise),
        sunset: format!("Sunset: {}", day.sunset),
        chance_of_rain: format!("Chance of Rain: {}%", day.chance_of_rain),
        uv_index: format!("UV Index: {}", day.uv_index),
    }
}

/// Tears down `previous` and builds the replacement. Values are copied
/// into the labels unmodified.
pub fn render(
    previous: Option<Report>,
    snapshot: &WeatherSnapshot,
    location: &LocationInfo,
    forecast: Option<&ForecastDay>,
) -> Report {
    teardown(previous);

    Report {
        location: format!("{}, {}", location.area_name, location.country),
        current: CurrentBlock {
            pictogram: icon_for(&snapshot.description),
            temperature: format!("{}°C", snapshot.temp_c),
            feels_like: format!("Feels like {}°C", snapshot.feels_like_c),
            description: snapshot.description.clone(),
        },
        wind: Highlight {
            label: "Wind Speed",
            value: format!("{} km/h", snapshot.wind_speed_kmph),
            caption: Some(format!(
                "{} ({}°)",
                snapshot.wind_dir_compass, snapshot.wind_dir_degree
            )),
        },
        humidity: Highlight {
            label: "Humidity",
            value: format!("{}%", snapshot.humidity),
            caption: None,
        },
        details: [
            Detail {
                label: "Pressure",
                value: format!("{} mb", snapshot.pressure_mb),
            },
            Detail {
                label: "Visibility",
                value: format!("{} km", snapshot.visibility_km),
            },
            Detail {
                label: "Cloud Cover",
                value: format!("{}%", snapshot.cloud_cover),
            },
            Detail {
                label: "Precipitation",
                value: format!("{} mm", snapshot.precip_mm),
            },
        ],
        tomorrow: forecast.map(tomorrow_block),
    }
}

/// Parses `doc` and renders it in place of `previous`.
///
/// A broken current section is an error and nothing is mounted. A broken
/// forecast section is only logged; the report is mounted without it.
pub fn present(
    previous: Option<Report>,
    doc: &RawWeatherDocument,
    hour_index: usize,
) -> Result<Report, AppError> {
    teardown(previous);

    let (snapshot, location) = weather::parse_current(doc)?;

    let forecast = match weather::parse_tomorrow(doc, hour_index) {
        Ok(day) => Some(day),
        Err(e) => {
            tracing::warn!("Error displaying forecast: {}", e);
            None
        }
    };

    Ok(render(None, &snapshot, &location, forecast.as_ref()))
}
