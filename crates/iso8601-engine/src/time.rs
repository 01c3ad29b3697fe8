//! Time-of-day values and their normalization to UTC ticks.
//!
//! A [`Time`] keeps the fields as they were written (so the canonical form
//! can reproduce the supplied precision) next to a single integer tick count
//! used for every comparison. Fractions are carried as decimal digits and
//! converted with integer arithmetic, so nothing is rounded through `f64`.

use serde::{Serialize, Serializer};

use crate::error::{Iso8601Error, Result};

/// One tick is 100 nanoseconds.
pub const TICKS_PER_SECOND: i64 = 10_000_000;
pub const TICKS_PER_MINUTE: i64 = 60 * TICKS_PER_SECOND;
pub const TICKS_PER_HOUR: i64 = 60 * TICKS_PER_MINUTE;
pub const TICKS_PER_DAY: i64 = 24 * TICKS_PER_HOUR;

/// Largest accepted UTC offset magnitude, in minutes.
pub const MAX_OFFSET_MINUTES: i32 = 24 * 60;

/// Fraction digits beyond this cannot change a tick count of any unit.
const MAX_FRACTION_DIGITS: usize = 18;

// ── Component ───────────────────────────────────────────────────────────────

/// A numeric time field as written: its integral part and, for the last
/// field supplied, an optional decimal fraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    whole: u8,
    fraction: Option<String>,
}

impl Component {
    /// An integral field.
    pub fn whole(whole: u8) -> Self {
        Self {
            whole,
            fraction: None,
        }
    }

    /// A field with decimal fraction `digits` (the text after `.` or `,`).
    ///
    /// # Errors
    ///
    /// Returns [`Iso8601Error::Format`] if `digits` is empty or not all
    /// ASCII digits.
    pub fn with_fraction(whole: u8, digits: &str) -> Result<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Iso8601Error::Format(format!(
                "'{digits}' is not a decimal fraction"
            )));
        }
        Ok(Self {
            whole,
            fraction: Some(digits.to_string()),
        })
    }

    /// The integral part.
    pub fn integer(&self) -> u8 {
        self.whole
    }

    /// The fraction digits exactly as supplied.
    pub fn fraction_digits(&self) -> Option<&str> {
        self.fraction.as_deref()
    }

    pub fn is_fractional(&self) -> bool {
        self.fraction.is_some()
    }

    /// True when the whole value is zero, fraction included.
    pub fn is_zero(&self) -> bool {
        self.whole == 0
            && self
                .fraction
                .as_deref()
                .is_none_or(|digits| digits.bytes().all(|b| b == b'0'))
    }

    /// The value as a float, for display and serialization only.
    pub fn as_f64(&self) -> f64 {
        match &self.fraction {
            Some(digits) => format!("{}.{digits}", self.whole)
                .parse()
                .unwrap_or(f64::from(self.whole)),
            None => f64::from(self.whole),
        }
    }

    /// Ticks represented by this field when one unit is `unit` ticks.
    /// Sub-tick remainders are truncated.
    fn ticks(&self, unit: i64) -> i64 {
        let whole = i64::from(self.whole) * unit;
        let Some(digits) = self.fraction.as_deref() else {
            return whole;
        };
        let digits = &digits[..digits.len().min(MAX_FRACTION_DIGITS)];
        let numerator: i128 = digits.parse().unwrap_or(0);
        let denominator = 10i128.pow(digits.len() as u32);
        whole + (numerator * i128::from(unit) / denominator) as i64
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

// ── Time ────────────────────────────────────────────────────────────────────

/// A time of day, optionally with a fixed UTC offset.
///
/// When an offset is present the tick count is normalized to UTC and the
/// value is zone-aware; otherwise it is zone-naive and the ticks are local.
/// The tick count is not wrapped into a single day: `T01:00+02:00` is
/// `-1h` in UTC ticks.
#[derive(Debug, Clone, Serialize)]
pub struct Time {
    hour: Component,
    #[serde(skip_serializing_if = "Option::is_none")]
    minute: Option<Component>,
    #[serde(skip_serializing_if = "Option::is_none")]
    second: Option<Component>,
    #[serde(skip_serializing_if = "Option::is_none")]
    zone_offset_minutes: Option<i32>,
    ticks: i64,
}

impl Time {
    /// Builds a time from its written fields and optional offset.
    ///
    /// # Errors
    ///
    /// - [`Iso8601Error::Format`] if a second is given without a minute, or
    ///   a fraction appears on a field that is not the last one supplied.
    /// - [`Iso8601Error::Range`] if a field is outside its domain (hour
    ///   0..=24 with 24 only as `24:00:00`, minute and second 0..=59) or the
    ///   offset magnitude exceeds 24 hours.
    pub fn new(
        hour: Component,
        minute: Option<Component>,
        second: Option<Component>,
        zone_offset_minutes: Option<i32>,
    ) -> Result<Self> {
        if second.is_some() && minute.is_none() {
            return Err(Iso8601Error::Format(
                "seconds require minutes".to_string(),
            ));
        }
        let non_terminal_fraction = match (&minute, &second) {
            (None, _) => false,
            (Some(_), None) => hour.is_fractional(),
            (Some(m), Some(_)) => hour.is_fractional() || m.is_fractional(),
        };
        if non_terminal_fraction {
            return Err(Iso8601Error::Format(
                "only the last time component may carry a fraction".to_string(),
            ));
        }

        if hour.integer() > 24 {
            return Err(Iso8601Error::Range(format!(
                "hour {} (must be 0..=24)",
                hour.integer()
            )));
        }
        if let Some(m) = &minute {
            if m.integer() > 59 {
                return Err(Iso8601Error::Range(format!(
                    "minute {} (must be 0..=59)",
                    m.integer()
                )));
            }
        }
        if let Some(s) = &second {
            if s.integer() > 59 {
                return Err(Iso8601Error::Range(format!(
                    "second {} (must be 0..=59)",
                    s.integer()
                )));
            }
        }
        if hour.integer() == 24
            && !(hour.is_zero()
                && minute.as_ref().is_none_or(Component::is_zero)
                && second.as_ref().is_none_or(Component::is_zero))
        {
            return Err(Iso8601Error::Range(
                "hour 24 only allowed as 24:00:00".to_string(),
            ));
        }
        if let Some(offset) = zone_offset_minutes {
            if offset.abs() > MAX_OFFSET_MINUTES {
                return Err(Iso8601Error::Range(format!(
                    "UTC offset of {offset} minutes exceeds 24 hours"
                )));
            }
        }

        let local = hour.ticks(TICKS_PER_HOUR)
            + minute.as_ref().map_or(0, |m| m.ticks(TICKS_PER_MINUTE))
            + second.as_ref().map_or(0, |s| s.ticks(TICKS_PER_SECOND));
        let zone = i64::from(zone_offset_minutes.unwrap_or(0)) * TICKS_PER_MINUTE;

        Ok(Self {
            hour,
            minute,
            second,
            zone_offset_minutes,
            ticks: local - zone,
        })
    }

    pub fn hour(&self) -> f64 {
        self.hour.as_f64()
    }

    pub fn minute(&self) -> Option<f64> {
        self.minute.as_ref().map(Component::as_f64)
    }

    pub fn second(&self) -> Option<f64> {
        self.second.as_ref().map(Component::as_f64)
    }

    pub fn hour_component(&self) -> &Component {
        &self.hour
    }

    pub fn minute_component(&self) -> Option<&Component> {
        self.minute.as_ref()
    }

    pub fn second_component(&self) -> Option<&Component> {
        self.second.as_ref()
    }

    /// Signed UTC offset in minutes, if one was supplied.
    pub fn zone_offset_minutes(&self) -> Option<i32> {
        self.zone_offset_minutes
    }

    /// Hour part of the offset, signed.
    pub fn zone_hour(&self) -> Option<i32> {
        self.zone_offset_minutes.map(|o| o / 60)
    }

    /// Minute part of the offset, unsigned.
    pub fn zone_minute(&self) -> Option<i32> {
        self.zone_offset_minutes.map(|o| o.abs() % 60)
    }

    pub fn is_zone_aware(&self) -> bool {
        self.zone_offset_minutes.is_some()
    }

    /// Ticks since midnight, in UTC when zone-aware.
    pub fn ticks(&self) -> i64 {
        self.ticks
    }
}
