//! Forecast fetching: hourly series for a location, reduced to the hour matching "now"

use crate::api::{HttpTransport, get_json};
use crate::clock::Clock;
use crate::config::ApiConfig;
use crate::models::{CurrentConditions, ForecastSeries, Location};
use crate::Result;
use tracing::{debug, info, instrument};

pub mod open_meteo;

use open_meteo::ForecastResponse;

pub struct ForecastFetcher<T, C> {
    transport: T,
    clock: C,
    base_url: String,
    timezone: String,
}

impl<T: HttpTransport, C: Clock> ForecastFetcher<T, C> {
    pub fn new(transport: T, clock: C, config: &ApiConfig) -> Self {
        Self {
            transport,
            clock,
            base_url: config.forecast_base_url.clone(),
            timezone: config.timezone.clone(),
        }
    }

    /// Download the hourly forecast series for a location
    #[instrument(skip(self), fields(lat = location.latitude, lon = location.longitude))]
    pub fn fetch_series(&self, location: &Location) -> Result<ForecastSeries> {
        let url = open_meteo::forecast_url(&self.base_url, location, &self.timezone);
        debug!("Forecast request URL: {}", url);

        let response: ForecastResponse = get_json(&self.transport, &url)?;
        let series = ForecastSeries::from(response.hourly);

        debug!("Received forecast with {} hourly entries", series.len());
        Ok(series)
    }

    /// Current conditions at a location
    pub fn fetch(&self, location: &Location) -> Result<CurrentConditions> {
        let series = self.fetch_series(location)?;
        let now = self.clock.now();
        let time_index = series.select_time_index(now);
        let conditions = series.conditions_at(time_index.index)?;

        info!(
            "Conditions at {} (hour {}{}): {:.1} C, {}%, {:.1} km/h, {}",
            location.format_coordinates(),
            time_index.index,
            if time_index.matched { "" } else { ", fallback" },
            conditions.temperature,
            conditions.humidity,
            conditions.wind_speed,
            conditions.condition
        );
        Ok(conditions)
    }
}
