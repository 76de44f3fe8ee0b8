//! Text panel showing the most recent successful search

use crate::models::{Condition, CurrentConditions};
use std::fmt;

/// Last good conditions, rendered the way the weather window lays them out
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherPanel {
    conditions: CurrentConditions,
}

impl Default for WeatherPanel {
    /// Placeholder values shown before the first search
    fn default() -> Self {
        Self {
            conditions: CurrentConditions {
                temperature: 15.0,
                humidity: 80,
                wind_speed: 5.0,
                condition: Condition::Sunny,
            },
        }
    }
}

impl WeatherPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn conditions(&self) -> &CurrentConditions {
        &self.conditions
    }

    /// Replace the shown conditions. `None` leaves the panel untouched.
    /// Returns whether anything changed.
    pub fn apply(&mut self, result: Option<CurrentConditions>) -> bool {
        match result {
            Some(conditions) => {
                self.conditions = conditions;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn temperature_label(&self) -> String {
        format!("{} C", self.conditions.temperature)
    }

    #[must_use]
    pub fn condition_label(&self) -> &'static str {
        self.conditions.condition.title()
    }

    #[must_use]
    pub fn humidity_label(&self) -> String {
        format!("Humidity {}%", self.conditions.humidity)
    }

    #[must_use]
    pub fn wind_speed_label(&self) -> String {
        format!("Wind Speed {}km/h", self.conditions.wind_speed)
    }

    /// Icon asset for the current condition, e.g. `rainy.png`
    #[must_use]
    pub fn icon_asset(&self) -> String {
        format!("{}.png", self.conditions.condition.as_str())
    }
}

impl fmt::Display for WeatherPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.icon_asset())?;
        writeln!(f, "{}", self.temperature_label())?;
        writeln!(f, "{}", self.condition_label())?;
        write!(f, "{}  {}", self.humidity_label(), self.wind_speed_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_panel() {
        let panel = WeatherPanel::new();
        assert_eq!(panel.temperature_label(), "15 C");
        assert_eq!(panel.condition_label(), "Sunny");
        assert_eq!(panel.humidity_label(), "Humidity 80%");
        assert_eq!(panel.wind_speed_label(), "Wind Speed 5km/h");
        assert_eq!(panel.icon_asset(), "sunny.png");
    }

    #[test]
    fn test_apply_success_replaces_everything() {
        let mut panel = WeatherPanel::new();
        let fresh = CurrentConditions {
            temperature: -2.4,
            humidity: 93,
            wind_speed: 21.7,
            condition: Condition::Snowy,
        };
        assert!(panel.apply(Some(fresh)));
        assert_eq!(panel.conditions(), &fresh);
        assert_eq!(
            panel.to_string(),
            "[snowy.png]\n-2.4 C\nSnowy\nHumidity 93%  Wind Speed 21.7km/h"
        );
    }

    #[test]
    fn test_apply_failure_keeps_previous_state() {
        let mut panel = WeatherPanel::new();
        panel.apply(Some(CurrentConditions {
            temperature: 8.0,
            humidity: 55,
            wind_speed: 3.5,
            condition: Condition::Rainy,
        }));
        let before = panel.clone();

        assert!(!panel.apply(None));
        assert_eq!(panel, before);
    }
}
