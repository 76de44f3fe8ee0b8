//! `OpenMeteo` API response structures and URL construction

use crate::models::{ForecastSeries, Location};
use serde::Deserialize;

/// Hourly variables requested from the forecast endpoint
pub const HOURLY_VARIABLES: &str = "temperature_2m,relativehumidity_2m,weathercode,windspeed_10m";

/// Geocoding response from `OpenMeteo`. `results` is absent when nothing matched.
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub latitude: f64,
    pub longitude: f64,
    pub name: Option<String>,
    pub country: Option<String>,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        Location {
            latitude: result.latitude,
            longitude: result.longitude,
            name: result.name,
            country: result.country,
        }
    }
}

/// Forecast response from `OpenMeteo`; only the hourly block is used
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub hourly: HourlyData,
}

/// Hourly weather data from `OpenMeteo`. Individual hours may be `null`.
#[derive(Debug, Deserialize)]
pub struct HourlyData {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m")]
    pub temperature: Vec<Option<f64>>,
    #[serde(rename = "relativehumidity_2m")]
    pub humidity: Vec<Option<i64>>,
    #[serde(rename = "weathercode")]
    pub weather_code: Vec<Option<i64>>,
    #[serde(rename = "windspeed_10m")]
    pub wind_speed: Vec<Option<f64>>,
}

impl From<HourlyData> for ForecastSeries {
    fn from(hourly: HourlyData) -> Self {
        ForecastSeries {
            timestamps: hourly.time,
            temperature: hourly.temperature,
            humidity: hourly.humidity,
            wind_speed: hourly.wind_speed,
            weather_code: hourly.weather_code,
        }
    }
}

/// Build the geocoding search URL. `name` must already be normalized.
#[must_use]
pub fn geocoding_url(base_url: &str, name: &str, count: u32, language: &str) -> String {
    format!(
        "{}/search?name={}&count={}&language={}&format=json",
        base_url.trim_end_matches('/'),
        name,
        count,
        urlencoding::encode(language)
    )
}

/// Build the hourly forecast URL for a location
#[must_use]
pub fn forecast_url(base_url: &str, location: &Location, timezone: &str) -> String {
    format!(
        "{}/forecast?latitude={}&longitude={}&hourly={}&timezone={}",
        base_url.trim_end_matches('/'),
        location.latitude,
        location.longitude,
        HOURLY_VARIABLES,
        urlencoding::encode(timezone)
    )
}
