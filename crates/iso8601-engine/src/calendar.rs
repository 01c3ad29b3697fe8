//! Calendar arithmetic on the proleptic Gregorian calendar.
//!
//! Pure functions that map the determining fields of a date granularity
//! (year, month/day, ordinal day, ISO week/weekday, sub-year grouping) to
//! absolute calendar days. Failures are always [`Iso8601Error::Range`],
//! except for the hemisphere-independent sub-year groupings which are
//! recognized but [`Iso8601Error::Unsupported`].

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

use crate::error::{Iso8601Error, Result};

// ── Absolute days ───────────────────────────────────────────────────────────

/// January 1 of `year`.
pub fn year_start(year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| {
        Iso8601Error::Range(format!("year {year} is outside the supported calendar"))
    })
}

/// `date` advanced by a whole number of calendar months.
pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| Iso8601Error::Range(format!("{date} + {months} months overflows")))
}

/// `date` advanced by a whole number of days.
pub fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| Iso8601Error::Range(format!("{date} + {days} days overflows")))
}

/// Number of days in `month` of `year`, or `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// The calendar date `year-month-day`.
pub fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(Iso8601Error::Range(format!(
            "month {month} (must be 1..=12)"
        )));
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        let max = days_in_month(year, month).unwrap_or(31);
        Iso8601Error::Range(format!(
            "day {day} for {year:04}-{month:02} (must be 1..={max})"
        ))
    })
}

/// The `ordinal`-th day of `year` (1-based).
///
/// Day 366 of a common year resolves to January 1 of the next year and is
/// rejected, as is anything else that leaves `year`.
pub fn ordinal_date(year: i32, ordinal: u32) -> Result<NaiveDate> {
    if ordinal == 0 {
        return Err(Iso8601Error::Range("day of year 0 (must be 1..=366)".to_string()));
    }
    let date = add_days(year_start(year)?, u64::from(ordinal - 1))?;
    if date.year() != year {
        return Err(Iso8601Error::Range(format!(
            "day of year {ordinal} falls outside {year:04}"
        )));
    }
    Ok(date)
}

// ── ISO week numbering ──────────────────────────────────────────────────────

/// Monday of week 1 of `week_year`.
///
/// Week 1 is the week containing the year's first Thursday: if January 1 is
/// Monday through Thursday the week starts on the Monday on or before it,
/// otherwise on the following Monday.
pub fn week_one_start(week_year: i32) -> Result<NaiveDate> {
    let jan1 = year_start(week_year)?;
    let from_monday = u64::from(jan1.weekday().num_days_from_monday());
    if from_monday <= 3 {
        jan1.checked_sub_days(Days::new(from_monday)).ok_or_else(|| {
            Iso8601Error::Range(format!("week year {week_year} is outside the supported calendar"))
        })
    } else {
        add_days(jan1, 7 - from_monday)
    }
}

/// Number of ISO weeks (52 or 53) in `week_year`.
pub fn weeks_in_year(week_year: i32) -> Result<u32> {
    let this = week_one_start(week_year)?;
    let next = week_one_start(week_year + 1)?;
    Ok((next.signed_duration_since(this).num_days() / 7) as u32)
}

/// Monday of `week` in `week_year`.
///
/// Week 53 is accepted whenever its Monday still falls in `week_year`, which
/// admits some years that [`weeks_in_year`] counts as 52 weeks long.
pub fn week_start(week_year: i32, week: u32) -> Result<NaiveDate> {
    if !(1..=53).contains(&week) {
        return Err(Iso8601Error::Range(format!("week {week} (must be 1..=53)")));
    }
    let start = add_days(week_one_start(week_year)?, 7 * u64::from(week - 1))?;
    if week == 53 && start.year() != week_year {
        return Err(Iso8601Error::Range(format!(
            "week {week} does not exist in week year {week_year:04}"
        )));
    }
    Ok(start)
}

/// Day `weekday` (1 = Monday .. 7 = Sunday) of `week` in `week_year`.
pub fn week_date(week_year: i32, week: u32, weekday: u32) -> Result<NaiveDate> {
    if !(1..=7).contains(&weekday) {
        return Err(Iso8601Error::Range(format!(
            "weekday {weekday} (must be 1..=7)"
        )));
    }
    add_days(week_start(week_year, week)?, u64::from(weekday - 1))
}

// ── Sub-year groupings ──────────────────────────────────────────────────────

/// Codes 25..=41 as `(start month, span in months, year shift, name)`.
const SUB_YEAR_TABLE: [(u32, u32, i32, &str); 17] = [
    (3, 3, 0, "Spring, Northern Hemisphere"),
    (6, 3, 0, "Summer, Northern Hemisphere"),
    (9, 3, 0, "Autumn, Northern Hemisphere"),
    (12, 3, 0, "Winter, Northern Hemisphere"),
    (9, 3, -1, "Spring, Southern Hemisphere"),
    (12, 3, 0, "Summer, Southern Hemisphere"),
    (3, 3, 0, "Autumn, Southern Hemisphere"),
    (6, 3, 0, "Winter, Southern Hemisphere"),
    (1, 3, 0, "Quarter 1"),
    (4, 3, 0, "Quarter 2"),
    (7, 3, 0, "Quarter 3"),
    (10, 3, 0, "Quarter 4"),
    (1, 4, 0, "Quadrimester 1"),
    (5, 4, 0, "Quadrimester 2"),
    (9, 4, 0, "Quadrimester 3"),
    (1, 6, 0, "Semester 1"),
    (7, 6, 0, "Semester 2"),
];

/// A sub-year grouping code (seasons, quarters, quadrimesters, semesters).
///
/// Only codes that resolve to a concrete span can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SubYearGroup(u8);

impl SubYearGroup {
    /// First code of the grouping range.
    pub const MIN: u8 = 21;
    /// Last code of the grouping range.
    pub const MAX: u8 = 41;

    /// Validates a grouping code.
    ///
    /// # Errors
    ///
    /// [`Iso8601Error::Unsupported`] for 21..=24 (seasons without a
    /// hemisphere), [`Iso8601Error::Range`] outside 21..=41.
    pub fn new(code: u8) -> Result<Self> {
        match code {
            21..=24 => Err(Iso8601Error::Unsupported(format!(
                "sub-year grouping {code} does not name a hemisphere"
            ))),
            25..=41 => Ok(Self(code)),
            _ => Err(Iso8601Error::Range(format!(
                "sub-year grouping {code} (must be {}..={})",
                Self::MIN,
                Self::MAX
            ))),
        }
    }

    pub fn code(self) -> u8 {
        self.0
    }

    fn entry(self) -> (u32, u32, i32, &'static str) {
        SUB_YEAR_TABLE[usize::from(self.0 - 25)]
    }

    /// Month (1..=12) in which the grouping starts.
    pub fn start_month(self) -> u32 {
        self.entry().0
    }

    /// Length of the grouping in months.
    pub fn month_span(self) -> u32 {
        self.entry().1
    }

    /// Human-readable name, e.g. `"Quarter 2"`.
    pub fn name(self) -> &'static str {
        self.entry().3
    }

    /// Half-open `[start, end)` day range of the grouping in `year`.
    pub fn range(self, year: i32) -> Result<(NaiveDate, NaiveDate)> {
        let (start_month, span, shift, _) = self.entry();
        let start = calendar_date(year + shift, start_month, 1)?;
        let end = add_months(start, span)?;
        Ok((start, end))
    }
}
