//! Hour/minute access for externally owned time values.
//!
//! The picker never owns calendar semantics. It reads the hour and minute of
//! whatever time value the host hands it and writes them back, leaving the
//! date, seconds and zone untouched.

use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

/// An (hour, minute) pair on a 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HourMinute {
    pub hour: u32,
    pub minute: u32,
}

impl HourMinute {
    pub const MIDNIGHT: HourMinute = HourMinute { hour: 0, minute: 0 };

    /// Creates a pair, wrapping the hour into 0..24 and the minute into 0..60.
    pub fn new_wrapping(hour: u32, minute: u32) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
        }
    }
}

impl std::fmt::Display for HourMinute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Read/write access to the hour and minute of a time value.
pub trait TimeFields: Clone {
    /// Returns the hour (0-23) and minute (0-59).
    fn hour_minute(&self) -> HourMinute;

    /// Returns a copy with hour and minute replaced and every other field kept.
    fn with_hour_minute(&self, value: HourMinute) -> Self;
}

impl TimeFields for HourMinute {
    fn hour_minute(&self) -> HourMinute {
        *self
    }

    fn with_hour_minute(&self, value: HourMinute) -> Self {
        value
    }
}

impl TimeFields for NaiveTime {
    fn hour_minute(&self) -> HourMinute {
        HourMinute::new_wrapping(self.hour(), self.minute())
    }

    fn with_hour_minute(&self, value: HourMinute) -> Self {
        self.with_hour(value.hour)
            .and_then(|t| t.with_minute(value.minute))
            .unwrap_or(*self)
    }
}

impl TimeFields for NaiveDateTime {
    fn hour_minute(&self) -> HourMinute {
        HourMinute::new_wrapping(self.hour(), self.minute())
    }

    fn with_hour_minute(&self, value: HourMinute) -> Self {
        self.with_hour(value.hour)
            .and_then(|t| t.with_minute(value.minute))
            .unwrap_or(*self)
    }
}

impl<Tz: TimeZone> TimeFields for DateTime<Tz> {
    fn hour_minute(&self) -> HourMinute {
        HourMinute::new_wrapping(self.hour(), self.minute())
    }

    // A wall-clock time that falls into a DST gap keeps the original value.
    fn with_hour_minute(&self, value: HourMinute) -> Self {
        self.with_hour(value.hour)
            .and_then(|t| t.with_minute(value.minute))
            .unwrap_or_else(|| self.clone())
    }
}
