//! Fixed-holiday calendar: a weekend plus holidays that fall on the same
//! `(day, month)` every year.

use bt_core::ensure;
use bt_core::errors::Result;
use chrono::{NaiveDate, Weekday};

use crate::calendar::Calendar;
use crate::holiday::{HolidaySet, Weekend};

const DAYS_IN_LEAP_YEAR: usize = 366;

/// A calendar whose non-business days are a fixed weekend and a set of
/// recurring holidays.
///
/// `Default` gives the Saturday/Sunday weekend and the holidays listed in
/// [`DEFAULT_HOLIDAYS`](crate::holiday::DEFAULT_HOLIDAYS).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHolidayCalendar {
    name: String,
    weekend: Weekend,
    holidays: HolidaySet,
}

impl FixedHolidayCalendar {
    /// Create a calendar from a weekend and a holiday set.
    ///
    /// Fails if the holidays cover every day of the year, since such a
    /// calendar has no business day to step to.
    pub fn new(name: impl Into<String>, weekend: Weekend, holidays: HolidaySet) -> Result<Self> {
        ensure!(
            holidays.len() < DAYS_IN_LEAP_YEAR,
            "holidays cover every day of the year"
        );
        Ok(Self {
            name: name.into(),
            weekend,
            holidays,
        })
    }

    /// Start building a calendar with the given name, no holidays and a
    /// Saturday/Sunday weekend.
    pub fn builder(name: impl Into<String>) -> FixedHolidayCalendarBuilder {
        FixedHolidayCalendarBuilder::new(name)
    }

    /// The weekend observed by this calendar.
    pub fn weekend(&self) -> Weekend {
        self.weekend
    }

    /// The recurring holidays observed by this calendar.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }
}

impl Default for FixedHolidayCalendar {
    fn default() -> Self {
        Self {
            name: "Fixed holidays".into(),
            weekend: Weekend::default(),
            holidays: HolidaySet::default_holidays(),
        }
    }
}

impl Calendar for FixedHolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.holidays.contains(date)
    }

    fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend.contains(date)
    }
}

/// Builder for [`FixedHolidayCalendar`].
#[derive(Debug, Clone)]
pub struct FixedHolidayCalendarBuilder {
    name: String,
    weekend: Weekend,
    pairs: Vec<(u8, u8)>,
}

impl FixedHolidayCalendarBuilder {
    /// Begin building a calendar.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weekend: Weekend::default(),
            pairs: Vec::new(),
        }
    }

    /// Set the two weekend days.
    pub fn with_weekend(mut self, first: Weekday, second: Weekday) -> Self {
        self.weekend = Weekend::new(first, second);
        self
    }

    /// Add a holiday on `day` of `month`.
    pub fn with_holiday(mut self, day: u8, month: u8) -> Self {
        self.pairs.push((day, month));
        self
    }

    /// Add several `(day, month)` holidays.
    pub fn with_holidays(mut self, pairs: &[(u8, u8)]) -> Self {
        self.pairs.extend_from_slice(pairs);
        self
    }

    /// Validate the holidays and build the calendar.
    pub fn build(self) -> Result<FixedHolidayCalendar> {
        let holidays = HolidaySet::from_pairs(&self.pairs)?;
        FixedHolidayCalendar::new(self.name, self.weekend, holidays)
    }
}
