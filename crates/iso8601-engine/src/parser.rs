//! Grammar dispatch from ISO 8601 text to [`Temporal`] values.
//!
//! Every accepted shape is a fixed regular expression tried in a fixed
//! order; the first pattern that matches decides how the text is read, so a
//! match that then fails validation is reported as a range error rather than
//! falling through to a looser pattern. "No match" is an internal `None`
//! and only becomes [`Iso8601Error::Format`] once every pattern is exhausted.
//!
//! # Supported shapes
//!
//! | Shape | Example | Value |
//! |-------|---------|-------|
//! | `CC` | `20` | century |
//! | `YYY` | `202` | decade |
//! | `YYYY` | `2021` | year |
//! | `YYYY-MM` | `2021-06` | month (`MM` > 20 is a sub-year grouping) |
//! | `YYYY-MM-DD`, `YYYYMMDD` | `2021-06-15` | calendar day |
//! | `YYYY-DDD`, `YYYYDDD` | `2021-166` | ordinal day |
//! | `YYYY-Www`, `YYYYWww` | `2021-W24` | ISO week |
//! | `YYYY-Www-D`, `YYYYWwwD` | `2021-W24-2` | ISO week day |
//! | `[T]hh[:mm[:ss]][.f]` | `T10:30` | time (extended) |
//! | `Thh[mm[ss]][.f]` | `T1030` | time (basic) |
//! | `<date>T<time>` | `2021-06-15T10:30Z` | date-time |
//!
//! A time may end in `Z` or a `±hh[[:]mm]` offset (`−`, U+2212, is
//! accepted for minus). When the offset has minutes, its separator style
//! must match the time's: `T10:30+05:00` and `T1030+0500` are valid,
//! `T1030+05:00` is not. The basic `YYYYMM` form is deliberately not
//! accepted.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Match, Regex};
use tracing::{debug, trace};

use crate::date::Date;
use crate::datetime::from_date_and_time;
use crate::error::{Iso8601Error, Result};
use crate::time::{Component, Time};
use crate::value::Temporal;

// ── Options ─────────────────────────────────────────────────────────────────

/// Options for [`parse_with_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Read `YYYY-GG` with `GG` in 21..=41 as a sub-year grouping.
    pub sub_year_groupings: bool,
    /// Read three digits as a decade.
    pub decades: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            sub_year_groupings: true,
            decades: true,
        }
    }
}

impl ParseOptions {
    /// Only the ISO 8601-1 shapes; the extensions are not recognized.
    pub fn strict() -> Self {
        Self {
            sub_year_groupings: false,
            decades: false,
        }
    }
}

// ── Entry points ────────────────────────────────────────────────────────────

/// Parse a date, time, or date-time with the default options.
///
/// # Errors
///
/// - [`Iso8601Error::Format`] if the text matches no pattern, contains more
///   than one `T`, or breaks a style rule.
/// - [`Iso8601Error::Range`] if a matched field is out of its domain.
/// - [`Iso8601Error::Unsupported`] for sub-year groupings 21..=24.
///
/// # Examples
///
/// ```
/// use iso8601_engine::{parse, Kind};
///
/// let week = parse("2009-W01").unwrap();
/// assert_eq!(week.kind(), Kind::Date);
/// assert_eq!(week.as_date().unwrap().inclusive_start().to_string(), "2008-12-29");
///
/// assert!(parse("200912").is_err());
/// ```
pub fn parse(spec: &str) -> Result<Temporal> {
    parse_with_options(spec, &ParseOptions::default())
}

/// Parse a date, time, or date-time.
///
/// A `T` after the first character splits the text into a date part and a
/// time part, both of which must parse and combine. Otherwise the date
/// patterns are tried, and only if none matches the time patterns.
pub fn parse_with_options(spec: &str, options: &ParseOptions) -> Result<Temporal> {
    trace!(spec, "parsing");

    let separators = spec.matches('T').count();
    if separators > 1 {
        return Err(Iso8601Error::Format(format!(
            "'{spec}' contains {separators} 'T' separators"
        )));
    }

    if let Some(index) = spec.find('T').filter(|&i| i > 0) {
        let (date_part, time_part) = spec.split_at(index);
        debug!(date_part, time_part, "splitting date-time");
        let date = parse_date_with_options(date_part, options)?;
        let time = parse_time(time_part)?;
        return from_date_and_time(date, time).map(Temporal::DateTime);
    }

    match parse_date_with_options(spec, options) {
        Err(Iso8601Error::Format(_)) => parse_time(spec).map(Temporal::Time),
        other => other.map(Temporal::Date),
    }
}

/// Parse a date with the default options.
pub fn parse_date(spec: &str) -> Result<Date> {
    parse_date_with_options(spec, &ParseOptions::default())
}

/// Parse a date: the first matching pattern decides.
pub fn parse_date_with_options(spec: &str, options: &ParseOptions) -> Result<Date> {
    for pattern in DATE_PATTERNS.iter() {
        let Some(caps) = pattern.regex.captures(spec) else {
            continue;
        };
        if let Some(date) = (pattern.build)(&caps, options)? {
            debug!(pattern = pattern.name, spec, "date pattern matched");
            return Ok(date);
        }
        trace!(pattern = pattern.name, spec, "pattern disabled by options");
    }
    Err(Iso8601Error::Format(format!(
        "'{spec}' matches no date pattern"
    )))
}

/// Parse a time, with or without a leading `T` and UTC offset.
pub fn parse_time(spec: &str) -> Result<Time> {
    let zone = split_zone(spec)?;
    for pattern in TIME_PATTERNS.iter() {
        if !pattern.style.compatible(zone.style) {
            continue;
        }
        if let Some(caps) = pattern.regex.captures(zone.body) {
            debug!(pattern = pattern.name, spec, "time pattern matched");
            let offset_minutes = zone.offset.map(|o| o.minutes(spec)).transpose()?;
            return build_time(&caps, offset_minutes);
        }
    }
    Err(Iso8601Error::Format(format!(
        "'{spec}' matches no time pattern"
    )))
}

// ── Date patterns ───────────────────────────────────────────────────────────

type DateBuilder = fn(&Captures<'_>, &ParseOptions) -> Result<Option<Date>>;

struct DatePattern {
    name: &'static str,
    regex: LazyLock<Regex>,
    build: DateBuilder,
}

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("pattern literal is a valid regex")
}

static DATE_PATTERNS: [DatePattern; 10] = [
    DatePattern {
        name: "century",
        regex: LazyLock::new(|| regex(r"^([0-9]{2})$")),
        build: |caps, _| Date::from_century(digits(caps.get(1))?).map(Some),
    },
    DatePattern {
        name: "decade",
        regex: LazyLock::new(|| regex(r"^([0-9]{3})$")),
        build: |caps, options| {
            if !options.decades {
                return Ok(None);
            }
            Date::from_decade(digits(caps.get(1))?).map(Some)
        },
    },
    DatePattern {
        name: "year",
        regex: LazyLock::new(|| regex(r"^([0-9]{4})$")),
        build: |caps, _| Date::from_year(digits(caps.get(1))?).map(Some),
    },
    DatePattern {
        name: "year-month",
        regex: LazyLock::new(|| regex(r"^([0-9]{4})-([0-9]{2})$")),
        build: year_month,
    },
    DatePattern {
        name: "calendar-extended",
        regex: LazyLock::new(|| regex(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$")),
        build: calendar_day,
    },
    DatePattern {
        name: "calendar-basic",
        regex: LazyLock::new(|| regex(r"^([0-9]{4})([0-9]{2})([0-9]{2})$")),
        build: calendar_day,
    },
    DatePattern {
        name: "ordinal",
        regex: LazyLock::new(|| regex(r"^([0-9]{4})-?([0-9]{3})$")),
        build: |caps, _| {
            Date::from_ordinal(digits(caps.get(1))?, digits(caps.get(2))?).map(Some)
        },
    },
    DatePattern {
        name: "week",
        regex: LazyLock::new(|| regex(r"^([0-9]{4})-?W([0-9]{2})$")),
        build: |caps, _| Date::from_week(digits(caps.get(1))?, digits(caps.get(2))?).map(Some),
    },
    DatePattern {
        name: "week-day-extended",
        regex: LazyLock::new(|| regex(r"^([0-9]{4})-W([0-9]{2})-([0-9])$")),
        build: week_day,
    },
    DatePattern {
        name: "week-day-basic",
        regex: LazyLock::new(|| regex(r"^([0-9]{4})W([0-9]{2})([0-9])$")),
        build: week_day,
    },
];

/// `YYYY-MM`, where a value above 20 is a sub-year grouping code.
fn year_month(caps: &Captures<'_>, options: &ParseOptions) -> Result<Option<Date>> {
    let year = digits(caps.get(1))?;
    let code: u8 = digits(caps.get(2))?;
    if code <= 20 {
        return Date::from_year_month(year, code).map(Some);
    }
    if !options.sub_year_groupings {
        return Ok(None);
    }
    Date::from_sub_year_group(year, code).map(Some)
}

fn calendar_day(caps: &Captures<'_>, _: &ParseOptions) -> Result<Option<Date>> {
    Date::from_calendar_date(
        digits(caps.get(1))?,
        digits(caps.get(2))?,
        digits(caps.get(3))?,
    )
    .map(Some)
}

fn week_day(caps: &Captures<'_>, _: &ParseOptions) -> Result<Option<Date>> {
    Date::from_week_date(
        digits(caps.get(1))?,
        digits(caps.get(2))?,
        digits(caps.get(3))?,
    )
    .map(Some)
}

// ── Time patterns ───────────────────────────────────────────────────────────

/// Separator style of a time body or offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Any,
    Basic,
    Extended,
}

impl Style {
    fn compatible(self, other: Style) -> bool {
        self == Style::Any || other == Style::Any || self == other
    }
}

struct TimePattern {
    name: &'static str,
    style: Style,
    regex: LazyLock<Regex>,
}

static TIME_PATTERNS: [TimePattern; 5] = [
    TimePattern {
        name: "hour",
        style: Style::Any,
        regex: LazyLock::new(|| regex(r"^T?(?P<h>[0-9]{2})(?:[,.](?P<f>[0-9]+))?$")),
    },
    TimePattern {
        name: "hour-minute-basic",
        style: Style::Basic,
        regex: LazyLock::new(|| {
            regex(r"^T(?P<h>[0-9]{2})(?P<m>[0-9]{2})(?:[,.](?P<f>[0-9]+))?$")
        }),
    },
    TimePattern {
        name: "hour-minute-second-basic",
        style: Style::Basic,
        regex: LazyLock::new(|| {
            regex(r"^T(?P<h>[0-9]{2})(?P<m>[0-9]{2})(?P<s>[0-9]{2})(?:[,.](?P<f>[0-9]+))?$")
        }),
    },
    TimePattern {
        name: "hour-minute-extended",
        style: Style::Extended,
        regex: LazyLock::new(|| {
            regex(r"^T?(?P<h>[0-9]{2}):(?P<m>[0-9]{2})(?:[,.](?P<f>[0-9]+))?$")
        }),
    },
    TimePattern {
        name: "hour-minute-second-extended",
        style: Style::Extended,
        regex: LazyLock::new(|| {
            regex(r"^T?(?P<h>[0-9]{2}):(?P<m>[0-9]{2}):(?P<s>[0-9]{2})(?:[,.](?P<f>[0-9]+))?$")
        }),
    },
];

static OFFSET: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"(?P<sign>[-+\x{2212}])(?P<h>[0-9]{2})(?:(?P<colon>:)?(?P<m>[0-9]{2}))?$")
});

/// A time body with its offset suffix removed.
struct Zone<'a> {
    body: &'a str,
    offset: Option<Offset>,
    style: Style,
}

/// A UTC offset as written, validated only once a time body has matched.
#[derive(Debug, Clone, Copy)]
struct Offset {
    positive: bool,
    hours: i32,
    minutes: i32,
}

impl Offset {
    const UTC: Offset = Offset {
        positive: true,
        hours: 0,
        minutes: 0,
    };

    fn minutes(self, spec: &str) -> Result<i32> {
        if self.hours > 24 {
            return Err(Iso8601Error::Format(format!(
                "UTC offset hour {} (must be 0..=24)",
                self.hours
            )));
        }
        if self.minutes > 59 {
            return Err(Iso8601Error::Format(format!(
                "UTC offset minute {} (must be 0..=59)",
                self.minutes
            )));
        }
        let magnitude = self.hours * 60 + self.minutes;
        if magnitude == 0 && !self.positive {
            return Err(Iso8601Error::Format(format!(
                "'{spec}': a zero UTC offset must be written with '+'"
            )));
        }
        Ok(if self.positive { magnitude } else { -magnitude })
    }
}

fn split_zone(spec: &str) -> Result<Zone<'_>> {
    if let Some(body) = spec.strip_suffix('Z') {
        return Ok(Zone {
            body,
            offset: Some(Offset::UTC),
            style: Style::Any,
        });
    }

    let Some(caps) = OFFSET.captures(spec) else {
        return Ok(Zone {
            body: spec,
            offset: None,
            style: Style::Any,
        });
    };

    let start = caps.get(0).map_or(spec.len(), |m| m.start());
    let minutes = match caps.name("m") {
        Some(m) => digits(Some(m))?,
        None => 0,
    };
    let style = match (caps.name("m"), caps.name("colon")) {
        (None, _) => Style::Any,
        (Some(_), Some(_)) => Style::Extended,
        (Some(_), None) => Style::Basic,
    };

    Ok(Zone {
        body: &spec[..start],
        offset: Some(Offset {
            positive: caps.name("sign").is_some_and(|m| m.as_str() == "+"),
            hours: digits(caps.name("h"))?,
            minutes,
        }),
        style,
    })
}

/// Builds a time from named captures; the fraction belongs to the last
/// field present.
fn build_time(caps: &Captures<'_>, offset_minutes: Option<i32>) -> Result<Time> {
    let fraction = caps.name("f").map(|m| m.as_str());
    let component = |whole: u8, last: bool| match fraction {
        Some(f) if last => Component::with_fraction(whole, f),
        _ => Ok(Component::whole(whole)),
    };

    let hour: u8 = digits(caps.name("h"))?;
    let minute: Option<u8> = caps.name("m").map(|m| digits(Some(m))).transpose()?;
    let second: Option<u8> = caps.name("s").map(|m| digits(Some(m))).transpose()?;

    let hour = component(hour, minute.is_none())?;
    let minute = minute
        .map(|m| component(m, second.is_none()))
        .transpose()?;
    let second = second.map(|s| component(s, true)).transpose()?;

    Time::new(hour, minute, second, offset_minutes)
}

/// Parses a matched digit run.
fn digits<T: FromStr>(m: Option<Match<'_>>) -> Result<T> {
    let text = m.map_or("", |m| m.as_str());
    text.parse()
        .map_err(|_| Iso8601Error::Format(format!("'{text}' is not a number")))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::error::ErrorKind;
    use crate::time::{TICKS_PER_HOUR, TICKS_PER_MINUTE, TICKS_PER_SECOND};
    use crate::value::Kind;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn date_range(spec: &str) -> (NaiveDate, NaiveDate) {
        let date = parse_date(spec).unwrap();
        (date.inclusive_start(), date.exclusive_end())
    }

    fn kind_of_error(spec: &str) -> ErrorKind {
        parse(spec).unwrap_err().kind()
    }

    // ── Dates ───────────────────────────────────────────────────────────

    #[test]
    fn test_parse_century_decade_year() {
        assert_eq!(date_range("20"), (ymd(2000, 1, 1), ymd(2100, 1, 1)));
        assert_eq!(date_range("202"), (ymd(2020, 1, 1), ymd(2030, 1, 1)));
        assert_eq!(date_range("2021"), (ymd(2021, 1, 1), ymd(2022, 1, 1)));
    }

    #[test]
    fn test_parse_month_and_day() {
        assert_eq!(date_range("2021-06"), (ymd(2021, 6, 1), ymd(2021, 7, 1)));
        assert_eq!(date_range("2021-06-15"), (ymd(2021, 6, 15), ymd(2021, 6, 16)));
        assert_eq!(date_range("20210615"), (ymd(2021, 6, 15), ymd(2021, 6, 16)));
    }

    #[test]
    fn test_parse_ordinal() {
        assert_eq!(date_range("2021-166"), (ymd(2021, 6, 15), ymd(2021, 6, 16)));
        assert_eq!(date_range("2021166"), (ymd(2021, 6, 15), ymd(2021, 6, 16)));
        assert_eq!(kind_of_error("2021-366"), ErrorKind::Range);
    }

    #[test]
    fn test_parse_weeks() {
        assert_eq!(date_range("2009-W01"), (ymd(2008, 12, 29), ymd(2009, 1, 5)));
        assert_eq!(date_range("2009W01"), (ymd(2008, 12, 29), ymd(2009, 1, 5)));
        assert_eq!(date_range("2009-W01-3"), (ymd(2008, 12, 31), ymd(2009, 1, 1)));
        assert_eq!(date_range("2009W013"), (ymd(2008, 12, 31), ymd(2009, 1, 1)));
        assert_eq!(kind_of_error("2021-W54"), ErrorKind::Range);
        assert_eq!(kind_of_error("2021-W53"), ErrorKind::Range);
        assert_eq!(kind_of_error("2021-W10-8"), ErrorKind::Range);
        assert_eq!(kind_of_error("2021-W10-0"), ErrorKind::Range);
    }

    #[test]
    fn test_parse_mixed_week_day_styles_rejected() {
        assert_eq!(kind_of_error("2021W10-3"), ErrorKind::Format);
        assert_eq!(kind_of_error("2021-W103"), ErrorKind::Format);
    }

    #[test]
    fn test_parse_sub_year_groupings() {
        assert_eq!(date_range("2021-34"), (ymd(2021, 4, 1), ymd(2021, 7, 1)));
        assert_eq!(date_range("2021-40"), (ymd(2021, 1, 1), ymd(2021, 7, 1)));
        assert_eq!(kind_of_error("2021-22"), ErrorKind::Unsupported);
        assert_eq!(kind_of_error("2021-42"), ErrorKind::Range);
        assert_eq!(kind_of_error("2021-13"), ErrorKind::Range);
        assert_eq!(kind_of_error("2021-00"), ErrorKind::Range);
    }

    #[test]
    fn test_parse_forbidden_basic_year_month() {
        assert_eq!(kind_of_error("200912"), ErrorKind::Format);
    }

    #[test]
    fn test_parse_invalid_calendar_day_is_range() {
        assert_eq!(kind_of_error("2021-02-29"), ErrorKind::Range);
        assert_eq!(kind_of_error("20210230"), ErrorKind::Range);
        assert!(parse("2020-02-29").is_ok());
    }

    #[test]
    fn test_parse_garbage_is_format() {
        for spec in ["", "x", "2021-6", "2021-06-1", "2021/06/15", "１２"] {
            assert_eq!(kind_of_error(spec), ErrorKind::Format, "spec {spec:?}");
        }
    }

    #[test]
    fn test_strict_options_disable_extensions() {
        let strict = ParseOptions::strict();
        let err = parse_with_options("202", &strict).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        let err = parse_with_options("2021-34", &strict).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(parse_with_options("2021-06", &strict).is_ok());
        assert!(parse_with_options("20", &strict).is_ok());
    }

    // ── Times ───────────────────────────────────────────────────────────

    #[test]
    fn test_parse_time_shapes() {
        let cases: &[(&str, i64)] = &[
            ("T10", 10 * TICKS_PER_HOUR),
            ("10.5", 10 * TICKS_PER_HOUR + 30 * TICKS_PER_MINUTE),
            ("T10,5", 10 * TICKS_PER_HOUR + 30 * TICKS_PER_MINUTE),
            ("T1030", 10 * TICKS_PER_HOUR + 30 * TICKS_PER_MINUTE),
            ("10:30", 10 * TICKS_PER_HOUR + 30 * TICKS_PER_MINUTE),
            ("T10:30.5", 10 * TICKS_PER_HOUR + 30 * TICKS_PER_MINUTE + 30 * TICKS_PER_SECOND),
            ("T103015", 10 * TICKS_PER_HOUR + 30 * TICKS_PER_MINUTE + 15 * TICKS_PER_SECOND),
            ("T10:30:15.25", 10 * TICKS_PER_HOUR + 30 * TICKS_PER_MINUTE + 15 * TICKS_PER_SECOND + TICKS_PER_SECOND / 4),
        ];
        for &(spec, ticks) in cases {
            let time = parse_time(spec).unwrap_or_else(|e| panic!("{spec}: {e}"));
            assert_eq!(time.ticks(), ticks, "spec {spec}");
            assert!(!time.is_zone_aware());
        }
    }

    #[test]
    fn test_parse_basic_time_requires_t() {
        // Without the designator four digits are a year
        assert_eq!(parse("1030").unwrap().kind(), Kind::Date);
        assert_eq!(parse("T1030").unwrap().kind(), Kind::Time);
    }

    #[test]
    fn test_parse_offsets() {
        let t = parse_time("T10:00Z").unwrap();
        assert_eq!(t.zone_offset_minutes(), Some(0));
        assert_eq!(t.ticks(), 10 * TICKS_PER_HOUR);

        let t = parse_time("T10:00+05:30").unwrap();
        assert_eq!(t.zone_offset_minutes(), Some(330));
        assert_eq!(t.ticks(), 4 * TICKS_PER_HOUR + 30 * TICKS_PER_MINUTE);

        let t = parse_time("T1000-0500").unwrap();
        assert_eq!(t.zone_offset_minutes(), Some(-300));

        let t = parse_time("T10:00\u{2212}05").unwrap();
        assert_eq!(t.zone_offset_minutes(), Some(-300));

        let t = parse_time("T10+01").unwrap();
        assert_eq!(t.zone_offset_minutes(), Some(60));
    }

    #[test]
    fn test_parse_offset_style_must_match_time() {
        assert_eq!(kind_of_error("T1030+05:00"), ErrorKind::Format);
        assert_eq!(kind_of_error("T10:30+0500"), ErrorKind::Format);
        assert!(parse("T10:30+05").is_ok());
        assert!(parse("T1030+05").is_ok());
        assert!(parse("T10+05:00").is_ok());
        assert!(parse("T10+0500").is_ok());
    }

    #[test]
    fn test_parse_zero_offset_sign() {
        assert_eq!(kind_of_error("T10:00-00:00"), ErrorKind::Format);
        assert_eq!(kind_of_error("T10:00\u{2212}00:00"), ErrorKind::Format);
        assert_eq!(kind_of_error("T10:00-00"), ErrorKind::Format);
        assert!(parse("T10:00+00:00").is_ok());
    }

    #[test]
    fn test_parse_offset_out_of_range() {
        assert_eq!(kind_of_error("T10:00+25:00"), ErrorKind::Format);
        assert_eq!(kind_of_error("T10:00+05:60"), ErrorKind::Format);
        assert_eq!(kind_of_error("2021-06-15T10:00-99"), ErrorKind::Format);
        assert_eq!(kind_of_error("T10:00+24:30"), ErrorKind::Range);
        assert!(parse("T10:00+24:00").is_ok());
    }

    #[test]
    fn test_parse_time_field_out_of_range() {
        assert_eq!(kind_of_error("T25:00"), ErrorKind::Range);
        assert_eq!(kind_of_error("T10:60"), ErrorKind::Range);
        assert_eq!(kind_of_error("T10:00:60"), ErrorKind::Range);
        assert!(parse("T24:00").is_ok());
    }

    // ── Date-times ──────────────────────────────────────────────────────

    #[test]
    fn test_parse_date_time() {
        let v = parse("2021-06-15T10:30:00Z").unwrap();
        let dt = v.as_date_time().unwrap();
        assert_eq!(
            dt.instant(),
            ymd(2021, 6, 15).and_hms_opt(10, 30, 0).unwrap()
        );
        assert!(dt.is_zone_aware());

        let v = parse("20210615T1030").unwrap();
        assert_eq!(v.kind(), Kind::DateTime);
        assert!(!v.as_date_time().unwrap().is_zone_aware());

        let v = parse("2021-W24-2T10:30+02:00").unwrap();
        assert_eq!(
            v.as_date_time().unwrap().instant(),
            ymd(2021, 6, 15).and_hms_opt(8, 30, 0).unwrap()
        );

        assert_eq!(parse("2021-166T10").unwrap().kind(), Kind::DateTime);
    }

    #[test]
    fn test_parse_date_time_rejects_periods_and_bad_parts() {
        assert_eq!(kind_of_error("2021-06T10:00"), ErrorKind::Format);
        assert_eq!(kind_of_error("2021T10:00"), ErrorKind::Format);
        assert_eq!(kind_of_error("2021-W24T10:00"), ErrorKind::Format);
        assert_eq!(kind_of_error("2021-06-15T"), ErrorKind::Format);
        assert_eq!(kind_of_error("2021-06-15T25:00"), ErrorKind::Range);
        assert_eq!(kind_of_error("2021-02-30T10:00"), ErrorKind::Range);
    }

    #[test]
    fn test_parse_rejects_multiple_t() {
        assert_eq!(kind_of_error("2021-06-15T10:00T11:00"), ErrorKind::Format);
        assert_eq!(kind_of_error("T10T11"), ErrorKind::Format);
    }
}
