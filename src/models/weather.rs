//! Current conditions model and weather-code classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse sky/precipitation category derived from a weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Unknown,
}

impl Condition {
    /// Map a WMO weather code to a condition. Total over all integers.
    #[must_use]
    pub fn classify(code: i64) -> Self {
        // Checked in this order, first match wins
        if code == 0 {
            Condition::Sunny
        } else if (1..=3).contains(&code) {
            Condition::Cloudy
        } else if (51..=67).contains(&code) || (80..=99).contains(&code) {
            Condition::Rainy
        } else if (71..=77).contains(&code) {
            Condition::Snowy
        } else {
            Condition::Unknown
        }
    }

    /// Lower-case label, also the icon asset stem
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Sunny => "sunny",
            Condition::Cloudy => "cloudy",
            Condition::Rainy => "rainy",
            Condition::Snowy => "snowy",
            Condition::Unknown => "unknown",
        }
    }

    /// Capitalized label for display
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::Snowy => "Snowy",
            Condition::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weather at the forecast hour matching "now"
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: i64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    pub condition: Condition,
}
