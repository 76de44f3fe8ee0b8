//! Hourly forecast series and time-index selection

use chrono::NaiveDateTime;
use tracing::warn;

use super::{Condition, CurrentConditions};
use crate::{Result, SkyglanceError};

/// Timestamp granularity used by the forecast endpoint (minute precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Index-aligned hourly sequences; position `i` in every vector describes `timestamps[i]`.
///
/// Values are `None` where the provider sent `null`, e.g. past a model's horizon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastSeries {
    pub timestamps: Vec<String>,
    /// Temperature in Celsius
    pub temperature: Vec<Option<f64>>,
    /// Relative humidity in percent
    pub humidity: Vec<Option<i64>>,
    /// Wind speed in km/h
    pub wind_speed: Vec<Option<f64>>,
    pub weather_code: Vec<Option<i64>>,
}

/// Which forecast hour was picked for "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeIndex {
    pub index: usize,
    /// `false` when no timestamp matched and index 0 was used instead
    pub matched: bool,
}

/// Format a local time the way the forecast endpoint formats its timestamps
#[must_use]
pub fn format_timestamp(now: NaiveDateTime) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

impl ForecastSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Find the hour matching `now`.
    ///
    /// Scans linearly for an exact string match and returns the first hit.
    /// When nothing matches, index 0 is returned with `matched == false`.
    // NOTE: index 0 is the earliest forecast hour and may be stale.
    #[must_use]
    pub fn select_time_index(&self, now: NaiveDateTime) -> TimeIndex {
        let wanted = format_timestamp(now);

        match self.timestamps.iter().position(|t| *t == wanted) {
            Some(index) => TimeIndex {
                index,
                matched: true,
            },
            None => {
                warn!(
                    "No forecast hour matches {} ({} hours in series), falling back to index 0",
                    wanted,
                    self.len()
                );
                TimeIndex {
                    index: 0,
                    matched: false,
                }
            }
        }
    }

    /// Read all values at `index`, failing if any of them is missing or null.
    /// Entries at other hours are never inspected.
    pub fn conditions_at(&self, index: usize) -> Result<CurrentConditions> {
        let temperature = value_at(&self.temperature, index, "temperature_2m")?;
        let humidity = value_at(&self.humidity, index, "relativehumidity_2m")?;
        let wind_speed = value_at(&self.wind_speed, index, "windspeed_10m")?;
        let code = value_at(&self.weather_code, index, "weathercode")?;

        Ok(CurrentConditions {
            temperature,
            humidity,
            wind_speed,
            condition: Condition::classify(code),
        })
    }
}

fn value_at<T: Copy>(values: &[Option<T>], index: usize, field: &str) -> Result<T> {
    match values.get(index) {
        Some(Some(value)) => Ok(*value),
        Some(None) => Err(SkyglanceError::parse(format!(
            "'{field}' is null at index {index}"
        ))),
        None => Err(SkyglanceError::parse(format!(
            "'{field}' has {} entries, index {index} is missing",
            values.len()
        ))),
    }
}
