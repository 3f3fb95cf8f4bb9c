//! Resolving local wall-clock times into zoned timestamps.
//!
//! Every place where the library builds a timestamp from a local date and
//! time of day goes through [`localize`], so that the UTC offset is always
//! derived from the date actually being constructed. On a day that crosses
//! a daylight-saving transition that offset differs from the one on the
//! starting date.

use bt_core::errors::{Error, Result};
use chrono::{DateTime, Days, Duration, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone};

use crate::time_of_day::TimeOfDay;

/// Look up an IANA time zone by name (e.g. `"US/Central"`).
pub fn parse_zone(name: &str) -> Result<chrono_tz::Tz> {
    name.parse::<chrono_tz::Tz>()
        .map_err(|_| Error::UnknownTimeZone(name.to_string()))
}

/// Resolve a local wall-clock time in `tz`.
///
/// * unambiguous times map to their single instant;
/// * times repeated by a backward transition map to the earlier instant;
/// * times skipped by a forward transition are read with the offset in force
///   before the gap, which moves them forward by the length of the gap
///   (02:30 on a spring-forward night becomes 03:30).
pub fn localize<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            // A day earlier is always clear of the gap.
            let earlier = local.checked_sub_signed(Duration::days(1)).unwrap_or(local);
            let before = tz.offset_from_utc_datetime(&earlier).fix();
            let utc = local
                .checked_sub_signed(Duration::seconds(i64::from(before.local_minus_utc())))
                .unwrap_or(local);
            tz.from_utc_datetime(&utc)
        }
    }
}

/// `date` at `time` in `tz`.
pub fn at<Tz: TimeZone>(tz: &Tz, date: NaiveDate, time: TimeOfDay) -> DateTime<Tz> {
    localize(tz, date.and_time(time.into()))
}

/// The same local date as `ts`, at `time`.
pub fn same_day_at<Tz: TimeZone>(ts: &DateTime<Tz>, time: TimeOfDay) -> DateTime<Tz> {
    at(&ts.timezone(), ts.date_naive(), time)
}

/// The date after `date`.
///
/// # Errors
/// `InvalidArgument` past the last date `chrono` can represent.
pub fn following_date(date: NaiveDate) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(1))
        .ok_or_else(|| Error::InvalidArgument(format!("date after {date} is out of range")))
}

/// Midnight at the start of the local date following `ts`.
///
/// # Errors
/// `InvalidArgument` if `ts` falls on the last representable date.
pub fn next_midnight<Tz: TimeZone>(ts: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    Ok(at(&ts.timezone(), following_date(ts.date_naive())?, TimeOfDay::MIDNIGHT))
}

/// Elapsed time from `from` to `to`, negative if `to` is earlier.
pub fn between<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>) -> Duration {
    to.naive_utc() - from.naive_utc()
}
