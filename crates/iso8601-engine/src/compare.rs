//! Equality, ordering, containment and overlap between values.
//!
//! Comparison is by normalized position in time, never by spelling:
//!
//! - Two dates are equal when they cover the same day range, whatever their
//!   granularity (`2021-06-15`, `2021-166` and `2021-W24-2` are one day).
//! - Times and date-times compare by their normalized tick count or
//!   instant. A zone-naive value is treated as if it were UTC.
//! - Values of different kinds are never equal and have no order.
//!
//! Containment and overlap are defined on the half-open day ranges of dates.
//! A date contains a date-time when the instant falls inside its range.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use chrono::{NaiveDateTime, NaiveTime};

use crate::date::Date;
use crate::datetime::DateTime;
use crate::time::Time;
use crate::value::Temporal;

// ── Date ────────────────────────────────────────────────────────────────────

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        self.inclusive_start() == other.inclusive_start()
            && self.exclusive_end() == other.exclusive_end()
    }
}

impl Eq for Date {}

impl Hash for Date {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inclusive_start().hash(state);
        self.exclusive_end().hash(state);
    }
}

impl Date {
    /// True when `other` lies entirely within this date's range.
    ///
    /// Every date contains itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso8601_engine::parse_date;
    ///
    /// let june = parse_date("2021-06").unwrap();
    /// assert!(june.contains(&parse_date("2021-06-15").unwrap()));
    /// assert!(!june.contains(&parse_date("2021-W26").unwrap()));
    /// ```
    pub fn contains(&self, other: &Date) -> bool {
        self.inclusive_start() <= other.inclusive_start()
            && other.exclusive_end() <= self.exclusive_end()
    }

    /// True when `instant` falls in `[inclusive_start, exclusive_end)`.
    pub fn contains_instant(&self, instant: NaiveDateTime) -> bool {
        self.inclusive_start().and_time(NaiveTime::MIN) <= instant
            && instant < self.exclusive_end().and_time(NaiveTime::MIN)
    }

    /// True when the two ranges share at least one day.
    ///
    /// Adjacent ranges (one ends where the other starts) do not overlap.
    pub fn overlaps(&self, other: &Date) -> bool {
        self.inclusive_start() < other.exclusive_end()
            && other.inclusive_start() < self.exclusive_end()
    }
}

// ── Time ────────────────────────────────────────────────────────────────────

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.ticks() == other.ticks()
    }
}

impl Eq for Time {}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ticks().cmp(&other.ticks())
    }
}

impl Hash for Time {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ticks().hash(state);
    }
}

// ── DateTime ────────────────────────────────────────────────────────────────

impl PartialEq for DateTime {
    fn eq(&self, other: &Self) -> bool {
        self.instant() == other.instant()
    }
}

impl Eq for DateTime {}

impl PartialOrd for DateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant().cmp(&other.instant())
    }
}

impl Hash for DateTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant().hash(state);
    }
}

// ── Temporal ────────────────────────────────────────────────────────────────

impl PartialEq for Temporal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Temporal::Date(a), Temporal::Date(b)) => a == b,
            (Temporal::Time(a), Temporal::Time(b)) => a == b,
            (Temporal::DateTime(a), Temporal::DateTime(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Temporal {}

/// Only times and date-times are ordered, and only against their own kind.
impl PartialOrd for Temporal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Temporal::Time(a), Temporal::Time(b)) => Some(a.cmp(b)),
            (Temporal::DateTime(a), Temporal::DateTime(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl Temporal {
    /// Containment across kinds.
    ///
    /// A date contains another date inside its range, or a date-time whose
    /// instant falls in its range. Nothing else contains anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso8601_engine::parse;
    ///
    /// let week = parse("2009-W01").unwrap();
    /// assert!(week.contains(&parse("2008-12-31T23:00").unwrap()));
    /// assert!(!week.contains(&parse("T10:00").unwrap()));
    /// ```
    pub fn contains(&self, other: &Temporal) -> bool {
        match (self, other) {
            (Temporal::Date(a), Temporal::Date(b)) => a.contains(b),
            (Temporal::Date(a), Temporal::DateTime(b)) => a.contains_instant(b.instant()),
            _ => false,
        }
    }

    /// Overlap across kinds.
    ///
    /// Between two dates this is range overlap; between a date and a
    /// date-time (in either order) it is containment of the instant. Every
    /// other pairing is `false`.
    pub fn overlaps(&self, other: &Temporal) -> bool {
        match (self, other) {
            (Temporal::Date(a), Temporal::Date(b)) => a.overlaps(b),
            (Temporal::Date(a), Temporal::DateTime(b))
            | (Temporal::DateTime(b), Temporal::Date(a)) => a.contains_instant(b.instant()),
            _ => false,
        }
    }
}
