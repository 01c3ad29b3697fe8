//! Canonical ISO 8601 text for every value.
//!
//! Formatting is total and deterministic: each value has exactly one
//! canonical string, chosen by its populated fields rather than by how the
//! input was spelled. Dates and times use the extended style; date-times are
//! always rendered in full as `YYYY-MM-DDTHH:MM:SS.fffffff` with seven
//! fraction digits, followed by `Z` when zone-aware.

use std::fmt;

use chrono::{Datelike, Timelike};

use crate::date::{Date, Granularity};
use crate::datetime::DateTime;
use crate::time::{Component, Time};
use crate::value::Temporal;

/// The canonical string of any value.
///
/// # Examples
///
/// ```
/// use iso8601_engine::{canonical, parse};
///
/// assert_eq!(canonical(&parse("20210615").unwrap()), "2021-06-15");
/// assert_eq!(canonical(&parse("2021166").unwrap()), "2021-166");
/// assert_eq!(canonical(&parse("T1030+0000").unwrap()), "T10:30Z");
/// ```
pub fn canonical(value: &Temporal) -> String {
    value.to_string()
}

impl fmt::Display for Temporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temporal::Date(date) => date.fmt(f),
            Temporal::Time(time) => time.fmt(f),
            Temporal::DateTime(dt) => dt.fmt(f),
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.granularity() {
            Granularity::Century { century } => write!(f, "{century:02}"),
            Granularity::Decade { decade } => write!(f, "{decade:03}"),
            Granularity::Day { year, month, day } => write!(f, "{year:04}-{month:02}-{day:02}"),
            Granularity::Month { year, month } => write!(f, "{year:04}-{month:02}"),
            Granularity::Ordinal { year, day } => write!(f, "{year:04}-{day:03}"),
            Granularity::WeekDay {
                week_year,
                week,
                weekday,
            } => write!(f, "{week_year:04}-W{week:02}-{weekday}"),
            Granularity::Week { week_year, week } => write!(f, "{week_year:04}-W{week:02}"),
            Granularity::SubYear { year, group } => write!(f, "{year:04}-{:02}", group.code()),
            Granularity::Year { year } => write!(f, "{year:04}"),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.integer())?;
        if let Some(digits) = self.fraction_digits() {
            write!(f, ".{digits}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.hour_component())?;
        if let Some(minute) = self.minute_component() {
            write!(f, ":{minute}")?;
        }
        if let Some(second) = self.second_component() {
            write!(f, ":{second}")?;
        }
        match self.zone_offset_minutes() {
            None => Ok(()),
            Some(0) => f.write_str("Z"),
            Some(offset) => {
                let sign = if offset > 0 { '+' } else { '-' };
                let magnitude = offset.unsigned_abs();
                write!(f, "{sign}{:02}:{:02}", magnitude / 60, magnitude % 60)
            }
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instant = self.instant();
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:07}",
            instant.year(),
            instant.month(),
            instant.day(),
            instant.hour(),
            instant.minute(),
            instant.second(),
            instant.nanosecond() / 100,
        )?;
        if self.is_zone_aware() {
            f.write_str("Z")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn canon(spec: &str) -> String {
        canonical(&parse(spec).unwrap_or_else(|e| panic!("{spec}: {e}")))
    }

    #[test]
    fn test_canonical_dates() {
        let cases = [
            ("20", "20"),
            ("202", "202"),
            ("2021", "2021"),
            ("0099", "0099"),
            ("2021-06", "2021-06"),
            ("2021-06-15", "2021-06-15"),
            ("20210615", "2021-06-15"),
            ("2021-001", "2021-001"),
            ("2021001", "2021-001"),
            ("2009W01", "2009-W01"),
            ("2009-W01", "2009-W01"),
            ("2009W013", "2009-W01-3"),
            ("2021-34", "2021-34"),
        ];
        for (spec, expected) in cases {
            assert_eq!(canon(spec), expected, "spec {spec}");
        }
    }

    #[test]
    fn test_canonical_times() {
        let cases = [
            ("T10", "T10"),
            ("10,5", "T10.5"),
            ("T1030", "T10:30"),
            ("10:30", "T10:30"),
            ("T103015.250", "T10:30:15.250"),
            ("T10:30Z", "T10:30Z"),
            ("T10:30+00:00", "T10:30Z"),
            ("T1030+0530", "T10:30+05:30"),
            ("T10:30-05", "T10:30-05:00"),
            ("T10:30\u{2212}03:30", "T10:30-03:30"),
        ];
        for (spec, expected) in cases {
            assert_eq!(canon(spec), expected, "spec {spec}");
        }
    }

    #[test]
    fn test_canonical_date_times() {
        let cases = [
            ("2021-06-15T10:30", "2021-06-15T10:30:00.0000000"),
            ("20210615T103015Z", "2021-06-15T10:30:15.0000000Z"),
            ("2021-06-15T10:30+02:00", "2021-06-15T08:30:00.0000000Z"),
            ("2021-06-15T10.5", "2021-06-15T10:30:00.0000000"),
            ("2021-06-15T10:30:15.123456789", "2021-06-15T10:30:15.1234567"),
            ("2009-W01-1T00:00Z", "2008-12-29T00:00:00.0000000Z"),
            ("2021-365T24:00", "2022-01-01T00:00:00.0000000"),
        ];
        for (spec, expected) in cases {
            assert_eq!(canon(spec), expected, "spec {spec}");
        }
    }
}
