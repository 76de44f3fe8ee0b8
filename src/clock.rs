//! Time sources used to pick the forecast hour for "now"

use chrono::{Local, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Source of the current wall-clock time
pub trait Clock {
    /// Current local date and time, without zone information
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    zone: Option<Tz>,
}

impl SystemClock {
    /// Clock in the machine's local time zone
    #[must_use]
    pub fn local() -> Self {
        Self { zone: None }
    }

    /// Clock in a fixed IANA time zone
    #[must_use]
    pub fn in_zone(zone: Tz) -> Self {
        Self { zone: Some(zone) }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        match self.zone {
            Some(zone) => Utc::now().with_timezone(&zone).naive_local(),
            None => Local::now().naive_local(),
        }
    }
}

/// Always returns the same instant. Used in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
