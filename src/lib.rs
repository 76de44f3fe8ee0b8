//! `SkyGlance` - current weather for any place name
//!
//! This library resolves a free-text place name to coordinates, downloads the
//! hourly Open-Meteo forecast for that spot, picks the hour matching "now"
//! and reduces it to temperature, humidity, wind speed and a coarse
//! sky condition.

pub mod api;
pub mod clock;
pub mod config;
pub mod current_weather;
pub mod display;
pub mod error;
pub mod location_resolver;
pub mod models;
pub mod weather;

// Re-export core types for public API
pub use api::{BlockingHttpClient, HttpTransport};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::SkyglanceConfig;
pub use current_weather::CurrentWeatherService;
pub use display::WeatherPanel;
pub use error::{ErrorCode, SkyglanceError};
pub use location_resolver::LocationResolver;
pub use models::{Condition, CurrentConditions, ForecastSeries, Location, TimeIndex};
pub use weather::ForecastFetcher;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SkyglanceError>;
