//! `TimeOfDay`: a clock time that can be placed on any date.

use bt_core::errors::{Error, Result};
use chrono::{NaiveTime, Timelike};

/// An `(hour, minute, second)` clock time, independent of any date or zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// 00:00:00.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(NaiveTime::MIN);

    /// Create a time from hour (0–23), minute (0–59) and second (0–59).
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self> {
        NaiveTime::from_hms_opt(hour, minute, second)
            .map(TimeOfDay)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "time of day {hour:02}:{minute:02}:{second:02} out of range"
                ))
            })
    }

    /// Return the hour (0–23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Return the minute (0–59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Return the second (0–59).
    pub fn second(&self) -> u32 {
        self.0.second()
    }
}

impl TryFrom<(u32, u32, u32)> for TimeOfDay {
    type Error = Error;

    fn try_from((h, m, s): (u32, u32, u32)) -> Result<Self> {
        TimeOfDay::new(h, m, s)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        TimeOfDay(t)
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(t: TimeOfDay) -> Self {
        t.0
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}
