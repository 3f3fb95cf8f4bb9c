//! # businesstime
//!
//! Business-day and business-hour arithmetic on time-zone-aware timestamps.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `bt-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! businesstime = "0.1"
//! ```
//!
//! ```rust
//! use businesstime::time::{BusinessTimeCalculator, TimeOfDay};
//! use chrono::TimeZone;
//! use chrono_tz::US::Central;
//!
//! let calc: BusinessTimeCalculator = BusinessTimeCalculator::default();
//! let monday = Central.with_ymd_and_hms(2017, 8, 14, 18, 45, 0).unwrap();
//! // Tuesday 15 August is a holiday.
//! let next = calc.next_business_day_time(&monday, Some(TimeOfDay::new(9, 30, 0)?))?;
//! assert_eq!(next, Central.with_ymd_and_hms(2017, 8, 16, 9, 30, 0).unwrap());
//! # Ok::<(), businesstime::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and shared aliases.
pub use bt_core as core;

/// Calendars, time windows and the business time calculator.
pub use bt_time as time;
