//! The parsed value: a date, a time, or a date-time.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::date::Date;
use crate::datetime::DateTime;
use crate::error::Iso8601Error;
use crate::time::Time;

/// Which variant of [`Temporal`] a value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    Date,
    Time,
    DateTime,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Date => "date",
            Kind::Time => "time",
            Kind::DateTime => "date-time",
        })
    }
}

/// Any value the parser can produce.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Temporal {
    Date(Date),
    Time(Time),
    DateTime(DateTime),
}

impl Temporal {
    pub fn kind(&self) -> Kind {
        match self {
            Temporal::Date(_) => Kind::Date,
            Temporal::Time(_) => Kind::Time,
            Temporal::DateTime(_) => Kind::DateTime,
        }
    }

    pub fn as_date(&self) -> Option<&Date> {
        match self {
            Temporal::Date(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<&Time> {
        match self {
            Temporal::Time(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<&DateTime> {
        match self {
            Temporal::DateTime(dt) => Some(dt),
            _ => None,
        }
    }
}

impl From<Date> for Temporal {
    fn from(date: Date) -> Self {
        Temporal::Date(date)
    }
}

impl From<Time> for Temporal {
    fn from(time: Time) -> Self {
        Temporal::Time(time)
    }
}

impl From<DateTime> for Temporal {
    fn from(dt: DateTime) -> Self {
        Temporal::DateTime(dt)
    }
}

impl FromStr for Temporal {
    type Err = Iso8601Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Date.to_string(), "date");
        assert_eq!(Kind::Time.to_string(), "time");
        assert_eq!(Kind::DateTime.to_string(), "date-time");
    }

    #[test]
    fn test_from_str_and_kind() {
        let v: Temporal = "2021-06".parse().unwrap();
        assert_eq!(v.kind(), Kind::Date);
        assert!(v.as_date().is_some());
        assert!(v.as_time().is_none());

        let v: Temporal = "T10:00".parse().unwrap();
        assert_eq!(v.kind(), Kind::Time);

        let v: Temporal = "2021-06-15T10:00".parse().unwrap();
        assert_eq!(v.kind(), Kind::DateTime);
        assert!(v.as_date_time().is_some());
    }

    #[test]
    fn test_serialize_tags_type() {
        let v: Temporal = "2021-06".parse().unwrap();
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["type"], "date");
        assert_eq!(json["granularity"], "month");
        assert_eq!(json["month"], 6);

        let v: Temporal = "T10:30+02:00".parse().unwrap();
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["type"], "time");
        assert_eq!(json["hour"], 10.0);
        assert_eq!(json["minute"], 30.0);
        assert_eq!(json["zone_offset_minutes"], 120);
        assert!(json.get("second").is_none());

        let v: Temporal = "2021-06-15T10:00Z".parse().unwrap();
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["type"], "date-time");
        assert_eq!(json["instant"], "2021-06-15T10:00:00");
    }
}
