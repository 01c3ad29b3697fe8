//! Date values at every supported granularity.
//!
//! A [`Date`] is built in one step from a [`Granularity`] carrying all of
//! its determining fields; the half-open `[inclusive_start, exclusive_end)`
//! day range is computed at construction and never changes.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{self, SubYearGroup};
use crate::error::{Iso8601Error, Result};

/// Largest year representable in the four-digit forms.
pub const MAX_YEAR: i32 = 9999;

/// The determining fields of a date, one variant per granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "granularity", rename_all = "snake_case")]
pub enum Granularity {
    /// `CC`: the hundred years starting at `CC00`.
    Century { century: u8 },
    /// `YYY`: the ten years starting at `YYY0`.
    Decade { decade: u16 },
    Year { year: i32 },
    Month { year: i32, month: u8 },
    Day { year: i32, month: u8, day: u8 },
    Ordinal { year: i32, day: u16 },
    Week { week_year: i32, week: u8 },
    WeekDay { week_year: i32, week: u8, weekday: u8 },
    SubYear { year: i32, group: SubYearGroup },
}

impl Granularity {
    /// True when the granularity names exactly one calendar day.
    pub fn is_single_day(&self) -> bool {
        matches!(
            self,
            Granularity::Day { .. } | Granularity::Ordinal { .. } | Granularity::WeekDay { .. }
        )
    }

    fn range(&self) -> Result<(NaiveDate, NaiveDate)> {
        match *self {
            Granularity::Century { century } => {
                if century > 99 {
                    return Err(Iso8601Error::Range(format!(
                        "century {century} (must be 0..=99)"
                    )));
                }
                let start = calendar::year_start(i32::from(century) * 100)?;
                Ok((start, calendar::add_months(start, 100 * 12)?))
            }
            Granularity::Decade { decade } => {
                if decade > 999 {
                    return Err(Iso8601Error::Range(format!(
                        "decade {decade} (must be 0..=999)"
                    )));
                }
                let start = calendar::year_start(i32::from(decade) * 10)?;
                Ok((start, calendar::add_months(start, 10 * 12)?))
            }
            Granularity::Year { year } => {
                let start = calendar::year_start(check_year(year)?)?;
                Ok((start, calendar::add_months(start, 12)?))
            }
            Granularity::Month { year, month } => {
                let start = calendar::calendar_date(check_year(year)?, u32::from(month), 1)?;
                Ok((start, calendar::add_months(start, 1)?))
            }
            Granularity::Day { year, month, day } => {
                let start =
                    calendar::calendar_date(check_year(year)?, u32::from(month), u32::from(day))?;
                Ok((start, calendar::add_days(start, 1)?))
            }
            Granularity::Ordinal { year, day } => {
                let start = calendar::ordinal_date(check_year(year)?, u32::from(day))?;
                Ok((start, calendar::add_days(start, 1)?))
            }
            Granularity::Week { week_year, week } => {
                let start = calendar::week_start(check_year(week_year)?, u32::from(week))?;
                Ok((start, calendar::add_days(start, 7)?))
            }
            Granularity::WeekDay {
                week_year,
                week,
                weekday,
            } => {
                let start = calendar::week_date(
                    check_year(week_year)?,
                    u32::from(week),
                    u32::from(weekday),
                )?;
                Ok((start, calendar::add_days(start, 1)?))
            }
            Granularity::SubYear { year, group } => group.range(check_year(year)?),
        }
    }
}

fn check_year(year: i32) -> Result<i32> {
    if (0..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(Iso8601Error::Range(format!(
            "year {year} (must be 0..={MAX_YEAR})"
        )))
    }
}

/// A date or period of days.
#[derive(Debug, Clone, Serialize)]
pub struct Date {
    #[serde(flatten)]
    granularity: Granularity,
    inclusive_start: NaiveDate,
    exclusive_end: NaiveDate,
}

impl Date {
    /// Builds a date from its granularity, computing the day range.
    ///
    /// # Errors
    ///
    /// [`Iso8601Error::Range`] if any field is outside its domain for the
    /// given year.
    pub fn new(granularity: Granularity) -> Result<Self> {
        let (inclusive_start, exclusive_end) = granularity.range()?;
        debug_assert!(inclusive_start < exclusive_end);
        Ok(Self {
            granularity,
            inclusive_start,
            exclusive_end,
        })
    }

    pub fn from_century(century: u8) -> Result<Self> {
        Self::new(Granularity::Century { century })
    }

    pub fn from_decade(decade: u16) -> Result<Self> {
        Self::new(Granularity::Decade { decade })
    }

    pub fn from_year(year: i32) -> Result<Self> {
        Self::new(Granularity::Year { year })
    }

    pub fn from_year_month(year: i32, month: u8) -> Result<Self> {
        Self::new(Granularity::Month { year, month })
    }

    pub fn from_calendar_date(year: i32, month: u8, day: u8) -> Result<Self> {
        Self::new(Granularity::Day { year, month, day })
    }

    pub fn from_ordinal(year: i32, day: u16) -> Result<Self> {
        Self::new(Granularity::Ordinal { year, day })
    }

    pub fn from_week(week_year: i32, week: u8) -> Result<Self> {
        Self::new(Granularity::Week { week_year, week })
    }

    pub fn from_week_date(week_year: i32, week: u8, weekday: u8) -> Result<Self> {
        Self::new(Granularity::WeekDay {
            week_year,
            week,
            weekday,
        })
    }

    /// A sub-year grouping of `year`.
    ///
    /// # Errors
    ///
    /// [`Iso8601Error::Unsupported`] for codes 21..=24,
    /// [`Iso8601Error::Range`] for codes outside 21..=41.
    pub fn from_sub_year_group(year: i32, code: u8) -> Result<Self> {
        let group = SubYearGroup::new(code)?;
        Self::new(Granularity::SubYear { year, group })
    }

    pub fn granularity(&self) -> &Granularity {
        &self.granularity
    }

    /// First day in the period.
    pub fn inclusive_start(&self) -> NaiveDate {
        self.inclusive_start
    }

    /// First day after the period.
    pub fn exclusive_end(&self) -> NaiveDate {
        self.exclusive_end
    }

    /// Length of the period in days.
    pub fn duration_days(&self) -> i64 {
        self.exclusive_end
            .signed_duration_since(self.inclusive_start)
            .num_days()
    }

    /// True when the date names a single calendar day and can carry a time.
    pub fn is_single_day(&self) -> bool {
        self.granularity.is_single_day()
    }

    /// The calendar year, for granularities that have one.
    pub fn year(&self) -> Option<i32> {
        match self.granularity {
            Granularity::Year { year }
            | Granularity::Month { year, .. }
            | Granularity::Day { year, .. }
            | Granularity::Ordinal { year, .. }
            | Granularity::SubYear { year, .. } => Some(year),
            _ => None,
        }
    }

    /// The ISO week-numbering year, for week granularities.
    pub fn week_year(&self) -> Option<i32> {
        match self.granularity {
            Granularity::Week { week_year, .. } | Granularity::WeekDay { week_year, .. } => {
                Some(week_year)
            }
            _ => None,
        }
    }
}
