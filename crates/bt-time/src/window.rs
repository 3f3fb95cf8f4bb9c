//! `BusinessWindow`: the working hours of a business day.

use bt_core::ensure;
use bt_core::errors::Result;
use chrono::{DateTime, TimeZone};

use crate::time_of_day::TimeOfDay;
use crate::zone;

/// Working hours `[start, end]` on a business day, with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BusinessWindow {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl BusinessWindow {
    /// Create a window. Fails unless `start` is strictly before `end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        ensure!(
            start < end,
            "business window start {start} must be before end {end}"
        );
        Ok(Self { start, end })
    }

    /// Create a window from `(hour, minute, second)` triples.
    pub fn from_hms(start: (u32, u32, u32), end: (u32, u32, u32)) -> Result<Self> {
        Self::new(TimeOfDay::try_from(start)?, TimeOfDay::try_from(end)?)
    }

    /// Opening time.
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    /// Closing time.
    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Opening and closing instants on the local date of `ts`.
    pub fn bounds_on<Tz: TimeZone>(&self, ts: &DateTime<Tz>) -> (DateTime<Tz>, DateTime<Tz>) {
        (
            zone::same_day_at(ts, self.start),
            zone::same_day_at(ts, self.end),
        )
    }
}

impl std::fmt::Display for BusinessWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
