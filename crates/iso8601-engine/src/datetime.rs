//! Combined date and time values.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::date::{Date, MAX_YEAR};
use crate::error::{Iso8601Error, Result};
use crate::time::Time;

/// Nanoseconds per tick.
const NANOS_PER_TICK: i64 = 100;

/// A single-day [`Date`] combined with a [`Time`] into one instant.
///
/// The instant is in UTC when the time carried an offset and local
/// (zone-naive) otherwise.
#[derive(Debug, Clone, Serialize)]
pub struct DateTime {
    date: Date,
    time: Time,
    instant: NaiveDateTime,
}

/// Combines a date and a time.
///
/// # Errors
///
/// Returns [`Iso8601Error::Format`] unless `date` names exactly one
/// calendar day (a calendar date, ordinal date, or week date with weekday),
/// and [`Iso8601Error::Range`] if the normalized instant leaves years
/// 0000..=9999.
///
/// # Examples
///
/// ```
/// use iso8601_engine::{from_date_and_time, parse, Temporal};
///
/// let (Temporal::Date(date), Temporal::Time(time)) = (parse("2021-06-15")?, parse("T10:00Z")?)
/// else {
///     unreachable!()
/// };
/// let dt = from_date_and_time(date, time)?;
/// assert_eq!(dt.to_string(), "2021-06-15T10:00:00.0000000Z");
/// # Ok::<(), iso8601_engine::Iso8601Error>(())
/// ```
pub fn from_date_and_time(date: Date, time: Time) -> Result<DateTime> {
    if !date.is_single_day() {
        return Err(Iso8601Error::Format(format!(
            "'{date}' does not name a single day and cannot carry a time"
        )));
    }

    let midnight = date.inclusive_start().and_time(NaiveTime::MIN);
    let offset = time
        .ticks()
        .checked_mul(NANOS_PER_TICK)
        .map(Duration::nanoseconds)
        .ok_or_else(|| Iso8601Error::Range(format!("time '{time}' overflows")))?;
    let instant = midnight
        .checked_add_signed(offset)
        .ok_or_else(|| Iso8601Error::Range(format!("'{date}T{time}' overflows")))?;
    if !(0..=MAX_YEAR).contains(&instant.year()) {
        return Err(Iso8601Error::Range(format!(
            "'{date}T{time}' normalizes to year {} (must be 0..={MAX_YEAR})",
            instant.year()
        )));
    }

    Ok(DateTime {
        date,
        time,
        instant,
    })
}

impl DateTime {
    pub fn date(&self) -> &Date {
        &self.date
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    /// The normalized instant, UTC when [`is_zone_aware`](Self::is_zone_aware).
    pub fn instant(&self) -> NaiveDateTime {
        self.instant
    }

    pub fn is_zone_aware(&self) -> bool {
        self.time.is_zone_aware()
    }
}
