//! Location Resolution Module
//!
//! Resolves a free-text place name into coordinates via the `OpenMeteo`
//! geocoding API. The first candidate wins; there is no disambiguation.

use crate::api::{HttpTransport, get_json};
use crate::config::ApiConfig;
use crate::models::Location;
use crate::weather::open_meteo::{self, GeocodingResponse};
use crate::{Result, SkyglanceError};
use tracing::{debug, info, instrument, warn};

/// Join the words of a place name with `+`, percent-encoding each word
#[must_use]
pub fn normalize_place_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| urlencoding::encode(word).into_owned())
        .collect::<Vec<_>>()
        .join("+")
}

/// Service for resolving place names
pub struct LocationResolver<T> {
    transport: T,
    base_url: String,
    result_count: u32,
    language: String,
}

impl<T: HttpTransport> LocationResolver<T> {
    pub fn new(transport: T, config: &ApiConfig) -> Self {
        Self {
            transport,
            base_url: config.geocoding_base_url.clone(),
            result_count: config.result_count,
            language: config.language.clone(),
        }
    }

    /// Resolve a place name to the first geocoding candidate.
    ///
    /// The name must not be blank; callers reject blank input before calling.
    #[instrument(skip(self))]
    pub fn resolve(&self, place_name: &str) -> Result<Location> {
        let normalized = normalize_place_name(place_name);
        let url = open_meteo::geocoding_url(
            &self.base_url,
            &normalized,
            self.result_count,
            &self.language,
        );
        debug!("Geocoding request URL: {}", url);

        let response: GeocodingResponse = get_json(&self.transport, &url)?;

        let Some(first) = response.results.unwrap_or_default().into_iter().next() else {
            warn!("No results found for location '{}'", place_name);
            return Err(SkyglanceError::no_results(place_name.trim()));
        };

        let location = Location::from(first);
        info!(
            "Resolved '{}' to {} ({})",
            place_name,
            location.label(),
            location.format_coordinates()
        );
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeTransport;

    const GEO: &str = "https://geocoding-api.open-meteo.com/v1/search";

    fn resolver(fake: &FakeTransport) -> LocationResolver<&FakeTransport> {
        LocationResolver::new(fake, &ApiConfig::default())
    }

    #[test]
    fn test_normalize_place_name() {
        assert_eq!(normalize_place_name("Boston"), "Boston");
        assert_eq!(normalize_place_name("New York"), "New+York");
        assert_eq!(normalize_place_name("  San \t Luis\nObispo "), "San+Luis+Obispo");
        assert_eq!(normalize_place_name("Zürich"), "Z%C3%BCrich");
        assert_eq!(normalize_place_name("A&B"), "A%26B");
    }

    #[test]
    fn test_resolve_takes_first_result() {
        let fake = FakeTransport::new().ok(
            GEO,
            r#"{"results":[
                {"name":"Boston","latitude":42.36,"longitude":-71.06,"country":"United States"},
                {"name":"Boston","latitude":52.97,"longitude":-0.02,"country":"United Kingdom"}
            ]}"#,
        );

        let location = resolver(&fake).resolve("Boston").unwrap();
        assert_eq!(location.latitude, 42.36);
        assert_eq!(location.longitude, -71.06);
        assert_eq!(location.country.as_deref(), Some("United States"));

        let requests = fake.requests.borrow();
        assert_eq!(
            requests[0],
            "https://geocoding-api.open-meteo.com/v1/search?name=Boston&count=10&language=en&format=json"
        );
    }

    #[test]
    fn test_resolve_sends_normalized_name() {
        let fake = FakeTransport::new().ok(GEO, r#"{"results":[{"latitude":1.0,"longitude":2.0}]}"#);
        resolver(&fake).resolve("New   York").unwrap();
        assert!(fake.requests.borrow()[0].contains("name=New+York&"));
    }

    #[test]
    fn test_resolve_empty_results() {
        let fake = FakeTransport::new().ok(GEO, r#"{"results":[]}"#);
        let err = resolver(&fake).resolve("Atlantis").unwrap_err();
        assert!(matches!(err, SkyglanceError::NoResults { .. }));
    }

    #[test]
    fn test_resolve_missing_results_field() {
        let fake = FakeTransport::new().ok(GEO, r#"{"generationtime_ms":0.5}"#);
        let err = resolver(&fake).resolve("Atlantis").unwrap_err();
        assert!(matches!(err, SkyglanceError::NoResults { .. }));
    }

    #[test]
    fn test_resolve_http_error() {
        let fake = FakeTransport::new().status(GEO, 500);
        let err = resolver(&fake).resolve("Boston").unwrap_err();
        assert!(matches!(err, SkyglanceError::HttpStatus { status: 500 }));
    }

    #[test]
    fn test_resolve_malformed_json() {
        let fake = FakeTransport::new().ok(GEO, "{\"results\": [");
        let err = resolver(&fake).resolve("Boston").unwrap_err();
        assert!(matches!(err, SkyglanceError::Parse { .. }));
    }
}
