//! Concrete calendar implementations.

/// Weekend plus recurring `(day, month)` holidays.
pub mod fixed_holiday;

pub use fixed_holiday::{FixedHolidayCalendar, FixedHolidayCalendarBuilder};
