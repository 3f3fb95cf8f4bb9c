//! # bt-time
//!
//! Business-day calendars and business-hour arithmetic on zoned timestamps.
//!
//! ```
//! use bt_time::{BusinessTimeCalculator, BusinessWindow, DurationMode};
//! use chrono::TimeZone;
//! use chrono_tz::US::Central;
//!
//! let calc: BusinessTimeCalculator = BusinessTimeCalculator::default();
//! let friday = Central.with_ymd_and_hms(2017, 8, 25, 17, 30, 0).unwrap();
//! let window = BusinessWindow::from_hms((10, 0, 0), (18, 0, 0)).unwrap();
//! let due = calc
//!     .add_duration(&friday, 24.75, DurationMode::BusinessHours(window))
//!     .unwrap();
//! assert_eq!(due, Central.with_ymd_and_hms(2017, 8, 31, 10, 15, 0).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Timestamp arithmetic over a business calendar.
pub mod calculator;

/// Calendar trait and the null calendar.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// Recurring holidays and weekends.
pub mod holiday;

/// `TimeOfDay`: a clock time without a date.
pub mod time_of_day;

/// `BusinessWindow`: daily working hours.
pub mod window;

/// Resolving local times in a time zone.
pub mod zone;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calculator::{hours_to_duration, BusinessTimeCalculator, DurationMode};
pub use calendar::{Calendar, NullCalendar};
pub use calendars::{FixedHolidayCalendar, FixedHolidayCalendarBuilder};
pub use holiday::{Holiday, HolidaySet, Weekend, DEFAULT_HOLIDAYS, DEFAULT_WEEKEND};
pub use time_of_day::TimeOfDay;
pub use window::BusinessWindow;
pub use zone::{localize, parse_zone};

pub use chrono::Weekday;
