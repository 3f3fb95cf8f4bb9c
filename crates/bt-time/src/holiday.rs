//! Recurring holidays and the weekend definition.
//!
//! A [`Holiday`] is a `(day, month)` pair with no year: the same calendar
//! date is a holiday every year, whatever weekday it falls on.

use bt_core::ensure;
use bt_core::errors::Result;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// Holidays observed by the default calendar, as `(day, month)`.
pub const DEFAULT_HOLIDAYS: [(u8, u8); 5] = [(26, 1), (1, 5), (15, 8), (2, 10), (1, 11)];

/// Weekend observed by the default calendar.
pub const DEFAULT_WEEKEND: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

/// A fixed `(day, month)` holiday recurring every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Holiday {
    day: u8,
    month: u8,
}

impl Holiday {
    /// Create a holiday on `day` of `month` (1–12).
    ///
    /// The day must exist in that month of a leap year, so 29 February is
    /// accepted and 30 February is not.
    pub fn new(day: u8, month: u8) -> Result<Self> {
        ensure!(
            (1..=12).contains(&month),
            "holiday month {month} out of range [1, 12]"
        );
        let last = max_days_in_month(month);
        ensure!(
            (1..=last).contains(&day),
            "holiday day {day} out of range [1, {last}] for month {month}"
        );
        Ok(Self { day, month })
    }

    /// The holiday falling on `date`'s day and month.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            day: date.day() as u8,
            month: date.month() as u8,
        }
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

fn max_days_in_month(month: u8) -> u8 {
    match month {
        2 => 29,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// A set of recurring holidays, looked up by `(day, month)` only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    holidays: HashSet<Holiday>,
}

impl HolidaySet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from `(day, month)` pairs, validating each one.
    pub fn from_pairs(pairs: &[(u8, u8)]) -> Result<Self> {
        let mut set = Self::new();
        for &(day, month) in pairs {
            set.insert(Holiday::new(day, month)?);
        }
        Ok(set)
    }

    /// The holidays of the default calendar.
    pub fn default_holidays() -> Self {
        Self {
            holidays: DEFAULT_HOLIDAYS
                .iter()
                .map(|&(day, month)| Holiday { day, month })
                .collect(),
        }
    }

    /// Add a holiday. Returns `false` if it was already present.
    pub fn insert(&mut self, holiday: Holiday) -> bool {
        self.holidays.insert(holiday)
    }

    /// Return `true` if `date`'s `(day, month)` is in the set.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&Holiday::of(date))
    }

    /// Number of holidays in the set.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Return `true` if the set has no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

/// The two weekdays treated as non-business days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Weekend([Weekday; 2]);

impl Weekend {
    /// A weekend made of `first` and `second`. Passing the same day twice
    /// gives a one-day weekend.
    pub fn new(first: Weekday, second: Weekday) -> Self {
        Weekend([first, second])
    }

    /// Return `true` if `date` falls on a weekend day.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date.weekday())
    }
}

impl Default for Weekend {
    fn default() -> Self {
        Weekend(DEFAULT_WEEKEND)
    }
}
