//! `BusinessTimeCalculator`: day stepping and hour accumulation over a
//! business calendar.
//!
//! All operations take zoned timestamps (`chrono::DateTime<Tz>` for any
//! `Tz: TimeZone`) and return new ones. Dates are stepped on the local wall
//! clock, and every timestamp built on a new date is resolved in the zone
//! for that date (see [`zone::localize`]), so crossing a daylight-saving
//! transition picks up the new offset.
//!
//! Hour accumulation is a single routine,
//! [`accumulate_within_window`](BusinessTimeCalculator::accumulate_within_window),
//! parameterised by a daily window. Business-hour mode uses the configured
//! opening hours; business-day mode uses the whole day, midnight to
//! midnight.

use bt_core::errors::{Error, Result};
use bt_core::{ensure, Hours};
use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use tracing::{debug, trace};

use crate::calendar::Calendar;
use crate::calendars::FixedHolidayCalendar;
use crate::time_of_day::TimeOfDay;
use crate::window::BusinessWindow;
use crate::zone;

const MICROS_PER_HOUR: f64 = 3_600_000_000.0;

/// How [`BusinessTimeCalculator::add_duration`] counts elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationMode {
    /// Plain addition; weekends and holidays count like any other day.
    Calendar,
    /// Only time on business days counts, around the clock.
    BusinessDays,
    /// Only time inside the window on business days counts.
    BusinessHours(BusinessWindow),
}

impl DurationMode {
    /// Select a mode from the two flags and the optional window bounds.
    ///
    /// # Errors
    /// `InvalidArgument` if business hours are requested without business
    /// days, without both bounds, or with `start >= end`.
    pub fn from_flags(
        business_day_only: bool,
        business_hour_only: bool,
        start: Option<TimeOfDay>,
        end: Option<TimeOfDay>,
    ) -> Result<Self> {
        match (business_day_only, business_hour_only) {
            (false, false) => Ok(DurationMode::Calendar),
            (true, false) => Ok(DurationMode::BusinessDays),
            (false, true) => Err(Error::InvalidArgument(
                "business hours can only be counted on business days".into(),
            )),
            (true, true) => match (start, end) {
                (Some(start), Some(end)) => {
                    Ok(DurationMode::BusinessHours(BusinessWindow::new(start, end)?))
                }
                _ => Err(Error::InvalidArgument(
                    "window is mandatory when restricting to business hours".into(),
                )),
            },
        }
    }
}

impl std::fmt::Display for DurationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationMode::Calendar => write!(f, "calendar"),
            DurationMode::BusinessDays => write!(f, "business days"),
            DurationMode::BusinessHours(window) => write!(f, "business hours {window}"),
        }
    }
}

/// Convert fractional hours to a duration, rounded to the microsecond.
pub fn hours_to_duration(hours: Hours) -> Result<Duration> {
    ensure!(hours.is_finite(), "hours must be finite, got {hours}");
    let micros = (hours * MICROS_PER_HOUR).round();
    ensure!(
        micros.abs() < i64::MAX as f64,
        "{hours} hours is out of range"
    );
    Ok(Duration::microseconds(micros as i64))
}

/// Business-day and business-hour arithmetic over a [`Calendar`].
///
/// The calculator holds no mutable state and can be shared freely between
/// threads.
#[derive(Debug, Clone, Default)]
pub struct BusinessTimeCalculator<C: Calendar = FixedHolidayCalendar> {
    calendar: C,
}

impl<C: Calendar> BusinessTimeCalculator<C> {
    /// Create a calculator over `calendar`.
    pub fn new(calendar: C) -> Self {
        Self { calendar }
    }

    /// The calendar deciding which dates are business days.
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Return `true` if the local date of `ts` is a business day.
    pub fn is_business_day<Tz: TimeZone>(&self, ts: &DateTime<Tz>) -> bool {
        self.calendar.is_business_day(ts.date_naive())
    }

    fn next_date(&self, date: NaiveDate, business_only: bool) -> Result<NaiveDate> {
        let next = zone::following_date(date)?;
        if !business_only {
            return Ok(next);
        }
        let mut adjusted = next;
        while !self.calendar.is_business_day(adjusted) {
            adjusted = zone::following_date(adjusted)?;
        }
        if adjusted != next {
            trace!(from = %next, to = %adjusted, "skipped non-business days");
        }
        Ok(adjusted)
    }

    /// Step to the next day, keeping the wall-clock time.
    ///
    /// With `business_only`, keep stepping until the date is a business day.
    ///
    /// # Errors
    /// `InvalidArgument` if the result falls past the last date `chrono` can
    /// represent.
    pub fn increment_day<Tz: TimeZone>(
        &self,
        ts: &DateTime<Tz>,
        business_only: bool,
    ) -> Result<DateTime<Tz>> {
        let date = self.next_date(ts.date_naive(), business_only)?;
        Ok(zone::localize(&ts.timezone(), date.and_time(ts.time())))
    }

    /// The next business day after `ts`, at `time_of_day` if given, otherwise
    /// at the wall-clock time of `ts`.
    ///
    /// # Errors
    /// See [`increment_day`](Self::increment_day).
    pub fn next_business_day_time<Tz: TimeZone>(
        &self,
        ts: &DateTime<Tz>,
        time_of_day: Option<TimeOfDay>,
    ) -> Result<DateTime<Tz>> {
        match time_of_day {
            Some(time) => {
                let date = self.next_date(ts.date_naive(), true)?;
                Ok(zone::at(&ts.timezone(), date, time))
            }
            None => self.increment_day(ts, true),
        }
    }

    /// Apply [`increment_day`](Self::increment_day) `days` times.
    ///
    /// With `business_only` every step skips non-business days on its own,
    /// so the result is `days` business days later.
    ///
    /// # Errors
    /// See [`increment_day`](Self::increment_day).
    pub fn add_days<Tz: TimeZone>(
        &self,
        ts: &DateTime<Tz>,
        days: u32,
        business_only: bool,
    ) -> Result<DateTime<Tz>> {
        if days == 0 {
            return Ok(ts.clone());
        }
        let mut date = ts.date_naive();
        for _ in 0..days {
            date = self.next_date(date, business_only)?;
        }
        Ok(zone::localize(&ts.timezone(), date.and_time(ts.time())))
    }

    /// [`add_days`](Self::add_days) for a signed count.
    ///
    /// # Errors
    /// `InvalidArgument` if `days` is negative or does not fit in a `u32`,
    /// or as for [`add_days`](Self::add_days).
    pub fn add_days_signed<Tz: TimeZone>(
        &self,
        ts: &DateTime<Tz>,
        days: i64,
        business_only: bool,
    ) -> Result<DateTime<Tz>> {
        ensure!(days >= 0, "day count must be non-negative, got {days}");
        let days = u32::try_from(days)
            .map_err(|_| Error::InvalidArgument(format!("day count {days} is too large")))?;
        self.add_days(ts, days, business_only)
    }

    /// Walk `remaining` forward from `ts`, consuming at most `window_length`
    /// per business day.
    ///
    /// `time_left_today` is what is left of the window on the current day
    /// from `ts` onwards. Whenever the remainder does not fit, the position
    /// jumps to `window_start` on the next business day. A remainder that
    /// exactly fills the current window therefore lands on the next window's
    /// opening. A non-positive `remaining` returns `ts` unchanged.
    ///
    /// # Errors
    /// `InvalidArgument` if `window_length` is not positive or the result is
    /// out of range.
    pub fn accumulate_within_window<Tz: TimeZone>(
        &self,
        ts: &DateTime<Tz>,
        mut remaining: Duration,
        mut time_left_today: Duration,
        window_start: TimeOfDay,
        window_length: Duration,
    ) -> Result<DateTime<Tz>> {
        ensure!(
            window_length > Duration::zero(),
            "window length must be positive, got {window_length}"
        );
        let mut current = ts.clone();
        while remaining > Duration::zero() {
            if remaining < time_left_today {
                return offset_by(current, remaining);
            }
            let next_open = self.next_business_day_time(&current, Some(window_start))?;
            remaining = remaining - time_left_today;
            trace!(
                from = %current.naive_local(),
                to = %next_open.naive_local(),
                remaining = %remaining,
                "crossed into next business window"
            );
            if remaining < window_length {
                return offset_by(next_open, remaining);
            }
            time_left_today = window_length;
            current = next_open;
        }
        Ok(current)
    }

    /// Add `hours` to `ts`, counting time according to `mode`.
    ///
    /// * [`DurationMode::Calendar`]: plain `ts + hours`.
    /// * [`DurationMode::BusinessDays`]: the rest of the current day counts
    ///   up to the next midnight, then whole business days of 24 hours.
    /// * [`DurationMode::BusinessHours`]: the window is placed on the date of
    ///   `ts`. Before opening the count starts at opening; after closing
    ///   nothing is left today and the count starts at the next business
    ///   day's opening.
    ///
    /// In the business modes a non-positive `hours` counts nothing: business
    /// days return `ts` unchanged, business hours return the position the
    /// count would start from (the opening when `ts` is before it).
    ///
    /// # Errors
    /// `InvalidArgument` if `hours` is not finite or the result is out of
    /// range.
    pub fn add_duration<Tz: TimeZone>(
        &self,
        ts: &DateTime<Tz>,
        hours: Hours,
        mode: DurationMode,
    ) -> Result<DateTime<Tz>> {
        let duration = hours_to_duration(hours)?;
        debug!(%hours, %mode, start = %ts.naive_local(), "adding duration");
        match mode {
            DurationMode::Calendar => offset_by(ts.clone(), duration),
            DurationMode::BusinessDays => {
                if duration <= Duration::zero() {
                    return Ok(ts.clone());
                }
                let time_left = zone::between(ts, &zone::next_midnight(ts)?);
                self.accumulate_within_window(
                    ts,
                    duration,
                    time_left,
                    TimeOfDay::MIDNIGHT,
                    Duration::hours(24),
                )
            }
            DurationMode::BusinessHours(window) => {
                let (open, close) = window.bounds_on(ts);
                let window_length = zone::between(&open, &close);
                let (current, time_left) = if *ts < open {
                    (open, window_length)
                } else if *ts <= close {
                    (ts.clone(), zone::between(ts, &close))
                } else {
                    (ts.clone(), Duration::zero())
                };
                self.accumulate_within_window(
                    &current,
                    duration,
                    time_left,
                    window.start(),
                    window_length,
                )
            }
        }
    }

    /// [`add_duration`](Self::add_duration) driven by flags.
    ///
    /// `start` and `end` are only read when `business_hour_only` is set.
    ///
    /// # Errors
    /// See [`DurationMode::from_flags`] and [`add_duration`](Self::add_duration).
    pub fn add_hours<Tz: TimeZone>(
        &self,
        ts: &DateTime<Tz>,
        hours: Hours,
        business_day_only: bool,
        business_hour_only: bool,
        start: Option<TimeOfDay>,
        end: Option<TimeOfDay>,
    ) -> Result<DateTime<Tz>> {
        let mode = DurationMode::from_flags(business_day_only, business_hour_only, start, end)?;
        self.add_duration(ts, hours, mode)
    }
}

fn offset_by<Tz: TimeZone>(ts: DateTime<Tz>, duration: Duration) -> Result<DateTime<Tz>> {
    let from = ts.naive_local();
    ts.checked_add_signed(duration)
        .ok_or_else(|| Error::InvalidArgument(format!("{from} + {duration} is out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::NullCalendar;
    use approx::assert_relative_eq;
    use chrono::Utc;

    fn utc(y: i32, m: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, mi, 0).unwrap()
    }

    fn tod(h: u32, m: u32, s: u32) -> TimeOfDay {
        TimeOfDay::new(h, m, s).unwrap()
    }

    #[test]
    fn hours_conversion() {
        let d = hours_to_duration(24.75).unwrap();
        assert_eq!(d, Duration::hours(24) + Duration::minutes(45));
        let d = hours_to_duration(1.0 / 3.0).unwrap();
        assert_relative_eq!(d.num_microseconds().unwrap() as f64, 1.2e9, epsilon = 1.0);
        assert_eq!(hours_to_duration(-0.5).unwrap(), Duration::minutes(-30));
        assert!(hours_to_duration(f64::NAN).is_err());
        assert!(hours_to_duration(f64::INFINITY).is_err());
        assert!(hours_to_duration(1e20).is_err());
    }

    #[test]
    fn mode_from_flags() {
        assert_eq!(
            DurationMode::from_flags(false, false, None, None),
            Ok(DurationMode::Calendar)
        );
        assert_eq!(
            DurationMode::from_flags(true, false, Some(tod(10, 0, 0)), None),
            Ok(DurationMode::BusinessDays)
        );
        assert_eq!(
            DurationMode::from_flags(true, true, Some(tod(10, 0, 0)), None),
            Err(Error::InvalidArgument(
                "window is mandatory when restricting to business hours".into()
            ))
        );
        assert!(DurationMode::from_flags(false, true, Some(tod(10, 0, 0)), Some(tod(18, 0, 0))).is_err());
        assert!(DurationMode::from_flags(true, true, Some(tod(18, 0, 0)), Some(tod(10, 0, 0))).is_err());
        let window = BusinessWindow::new(tod(10, 0, 0), tod(18, 0, 0)).unwrap();
        assert_eq!(
            DurationMode::from_flags(true, true, Some(tod(10, 0, 0)), Some(tod(18, 0, 0))),
            Ok(DurationMode::BusinessHours(window))
        );
    }

    #[test]
    fn increment_day_skips_run_of_closed_days() {
        let calc = BusinessTimeCalculator::<FixedHolidayCalendar>::default();
        // Fri 2017-09-29; Sat, Sun, then Mon 2 October is a holiday.
        let fri = utc(2017, 9, 29, 12, 0);
        assert_eq!(calc.increment_day(&fri, true).unwrap(), utc(2017, 10, 3, 12, 0));
        assert_eq!(calc.increment_day(&fri, false).unwrap(), utc(2017, 9, 30, 12, 0));
    }

    #[test]
    fn next_business_day_time_keeps_time_without_override() {
        let calc = BusinessTimeCalculator::<FixedHolidayCalendar>::default();
        let mon = utc(2017, 8, 14, 18, 45);
        assert_eq!(calc.next_business_day_time(&mon, None).unwrap(), utc(2017, 8, 16, 18, 45));
        assert_eq!(
            calc.next_business_day_time(&mon, Some(tod(9, 30, 0))).unwrap(),
            utc(2017, 8, 16, 9, 30)
        );
    }

    #[test]
    fn add_days_identity_and_signed() {
        let calc = BusinessTimeCalculator::<FixedHolidayCalendar>::default();
        let sat = utc(2017, 8, 26, 8, 0);
        assert_eq!(calc.add_days(&sat, 0, true).unwrap(), sat);
        assert_eq!(calc.add_days_signed(&sat, 1, true).unwrap(), utc(2017, 8, 28, 8, 0));
        assert!(matches!(
            calc.add_days_signed(&sat, -1, false),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn stepping_past_the_last_date_is_an_error() {
        let calc = BusinessTimeCalculator::new(NullCalendar);
        let last = Utc.from_utc_datetime(&NaiveDate::MAX.and_hms_opt(12, 0, 0).unwrap());
        assert!(matches!(calc.increment_day(&last, false), Err(Error::InvalidArgument(_))));
        assert!(calc.next_business_day_time(&last, Some(tod(10, 0, 0))).is_err());
        assert_eq!(calc.add_days(&last, 0, false).unwrap(), last);
        let hours = calc.accumulate_within_window(
            &last,
            Duration::hours(2),
            Duration::hours(1),
            tod(10, 0, 0),
            Duration::hours(8),
        );
        assert!(hours.is_err());
    }

    #[test]
    fn accumulate_exact_fit_rolls_to_next_opening() {
        let calc = BusinessTimeCalculator::new(NullCalendar);
        let ts = utc(2017, 8, 25, 16, 0);
        let out = calc
            .accumulate_within_window(
                &ts,
                Duration::hours(2),
                Duration::hours(2),
                tod(10, 0, 0),
                Duration::hours(8),
            )
            .unwrap();
        assert_eq!(out, utc(2017, 8, 26, 10, 0));
    }

    #[test]
    fn accumulate_non_positive_remaining_is_identity() {
        let calc = BusinessTimeCalculator::new(NullCalendar);
        let ts = utc(2017, 8, 25, 16, 0);
        for remaining in [Duration::zero(), Duration::hours(-3)] {
            let out = calc
                .accumulate_within_window(&ts, remaining, Duration::hours(2), tod(10, 0, 0), Duration::hours(8))
                .unwrap();
            assert_eq!(out, ts);
        }
    }

    #[test]
    fn accumulate_rejects_empty_window() {
        let calc = BusinessTimeCalculator::new(NullCalendar);
        let ts = utc(2017, 8, 25, 16, 0);
        assert!(calc
            .accumulate_within_window(&ts, Duration::hours(1), Duration::zero(), tod(10, 0, 0), Duration::zero())
            .is_err());
    }

    #[test]
    fn business_hours_before_opening_starts_at_opening() {
        let calc = BusinessTimeCalculator::<FixedHolidayCalendar>::default();
        let window = BusinessWindow::from_hms((10, 0, 0), (18, 0, 0)).unwrap();
        let early = utc(2017, 8, 28, 7, 0);
        let out = calc
            .add_duration(&early, 3.5, DurationMode::BusinessHours(window))
            .unwrap();
        assert_eq!(out, utc(2017, 8, 28, 13, 30));
    }

    #[test]
    fn business_hours_after_closing_starts_next_day() {
        let calc = BusinessTimeCalculator::<FixedHolidayCalendar>::default();
        let window = BusinessWindow::from_hms((10, 0, 0), (18, 0, 0)).unwrap();
        // Fri 2017-08-25 after closing → Mon opening + 1h
        let late = utc(2017, 8, 25, 20, 0);
        let out = calc
            .add_duration(&late, 1.0, DurationMode::BusinessHours(window))
            .unwrap();
        assert_eq!(out, utc(2017, 8, 28, 11, 0));
    }

    #[test]
    fn non_positive_hours_count_nothing() {
        let calc = BusinessTimeCalculator::<FixedHolidayCalendar>::default();
        let window = BusinessWindow::from_hms((10, 0, 0), (18, 0, 0)).unwrap();
        let early = utc(2017, 8, 28, 7, 0);
        let midday = utc(2017, 8, 28, 12, 0);
        for hours in [0.0, -2.0] {
            let days = calc.add_duration(&early, hours, DurationMode::BusinessDays);
            assert_eq!(days.unwrap(), early);
            // Before opening the count starts at the opening.
            let opening = calc.add_duration(&early, hours, DurationMode::BusinessHours(window));
            assert_eq!(opening.unwrap(), utc(2017, 8, 28, 10, 0));
            let inside = calc.add_duration(&midday, hours, DurationMode::BusinessHours(window));
            assert_eq!(inside.unwrap(), midday);
        }
        assert_eq!(
            calc.add_duration(&early, -2.0, DurationMode::Calendar).unwrap(),
            utc(2017, 8, 28, 5, 0)
        );
    }

    #[test]
    fn business_days_from_weekend_start() {
        let calc = BusinessTimeCalculator::<FixedHolidayCalendar>::default();
        // Sat 2017-08-26 12:00: the rest of Saturday still counts; only day
        // crossings skip closed days.
        let sat = utc(2017, 8, 26, 12, 0);
        let out = calc.add_duration(&sat, 13.0, DurationMode::BusinessDays).unwrap();
        assert_eq!(out, utc(2017, 8, 28, 1, 0));
    }

    #[test]
    fn calculator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BusinessTimeCalculator>();

        let calc = std::sync::Arc::new(BusinessTimeCalculator::<FixedHolidayCalendar>::default());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let calc = std::sync::Arc::clone(&calc);
                std::thread::spawn(move || calc.add_days(&utc(2017, 8, 11, 9, 0), i, true))
            })
            .collect();
        let results: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();
        assert_eq!(results[3], utc(2017, 8, 17, 9, 0));
    }

    #[test]
    fn mode_display() {
        let window = BusinessWindow::from_hms((10, 0, 0), (18, 0, 0)).unwrap();
        assert_eq!(
            DurationMode::BusinessHours(window).to_string(),
            "business hours 10:00:00-18:00:00"
        );
    }
}
