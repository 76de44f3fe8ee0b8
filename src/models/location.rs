//! Location model for geographic coordinates and metadata

use serde::{Deserialize, Serialize};

/// Location coordinates
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Place name as reported by the geocoder
    pub name: Option<String>,
    /// Country name as reported by the geocoder
    pub country: Option<String>,
}

impl Location {
    /// Create a new location from bare coordinates
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            name: None,
            country: None,
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    /// Human-readable label, falling back to coordinates
    #[must_use]
    pub fn label(&self) -> String {
        match (&self.name, &self.country) {
            (Some(name), Some(country)) => format!("{name}, {country}"),
            (Some(name), None) => name.clone(),
            _ => self.format_coordinates(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_label() {
        let location = Location {
            name: Some("Boston".to_string()),
            country: Some("United States".to_string()),
            ..Location::new(42.36, -71.06)
        };
        assert_eq!(location.label(), "Boston, United States");

        let bare = Location::new(42.36, -71.06);
        assert_eq!(bare.label(), "42.3600, -71.0600");
    }
}
