//! Data models for SkyGlance
//!
//! - Location: Geographic coordinates resolved from a place name
//! - Forecast: Hourly forecast series as delivered by the forecast endpoint
//! - Weather: Current conditions and the weather-code classifier

pub mod forecast;
pub mod location;
pub mod weather;

// Re-export all public types for convenient access
pub use forecast::{ForecastSeries, TimeIndex};
pub use location::Location;
pub use weather::{Condition, CurrentConditions};
