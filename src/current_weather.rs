//! Current Weather Module
//!
//! Runs one search end to end: place name → coordinates → current
//! conditions. Steps run strictly in order and each search is independent.
//! Any failure is logged and surfaced as the absence of a result, never as
//! partially filled conditions.

use crate::api::{BlockingHttpClient, HttpTransport};
use crate::clock::{Clock, SystemClock};
use crate::config::SkyglanceConfig;
use crate::location_resolver::LocationResolver;
use crate::models::{CurrentConditions, Location};
use crate::weather::ForecastFetcher;
use crate::{Result, SkyglanceError};
use tracing::{error, info, instrument};

/// Current weather service
pub struct CurrentWeatherService<T, C> {
    resolver: LocationResolver<T>,
    fetcher: ForecastFetcher<T, C>,
}

impl CurrentWeatherService<BlockingHttpClient, SystemClock> {
    /// Build the service against the real HTTP client and system clock
    pub fn from_config(config: &SkyglanceConfig) -> Result<Self> {
        let client = BlockingHttpClient::new(&config.api)?;
        let clock = if config.clock.use_forecast_timezone {
            SystemClock::in_zone(config.forecast_timezone()?)
        } else {
            SystemClock::local()
        };
        Ok(Self::new(client, clock, config))
    }
}

impl<T: HttpTransport + Clone, C: Clock> CurrentWeatherService<T, C> {
    pub fn new(transport: T, clock: C, config: &SkyglanceConfig) -> Self {
        Self {
            resolver: LocationResolver::new(transport.clone(), &config.api),
            fetcher: ForecastFetcher::new(transport, clock, &config.api),
        }
    }

    /// Resolve a place name to coordinates
    pub fn resolve_location(&self, place_name: &str) -> Result<Location> {
        if place_name.trim().is_empty() {
            return Err(SkyglanceError::validation("Location cannot be empty"));
        }
        self.resolver.resolve(place_name)
    }

    /// Current conditions at known coordinates
    pub fn fetch_conditions(&self, location: &Location) -> Result<CurrentConditions> {
        self.fetcher.fetch(location)
    }

    /// Resolve then fetch, returning the first error encountered
    #[instrument(skip(self))]
    pub fn try_search(&self, place_name: &str) -> Result<CurrentConditions> {
        let location = self.resolve_location(place_name)?;
        let conditions = self.fetch_conditions(&location)?;
        info!("Search for '{}' complete", place_name.trim());
        Ok(conditions)
    }

    /// Resolve then fetch; failures are logged and yield `None`
    pub fn search(&self, place_name: &str) -> Option<CurrentConditions> {
        match self.try_search(place_name) {
            Ok(conditions) => Some(conditions),
            Err(e) => {
                error!(
                    code = e.code().as_str(),
                    "Weather search for '{}' failed: {}", place_name, e
                );
                None
            }
        }
    }
}
