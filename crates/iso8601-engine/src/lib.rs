//! # iso8601-engine
//!
//! Parsing, normalization, canonical formatting and comparison of ISO 8601
//! dates, times and date-times.
//!
//! Every accepted text becomes a [`Temporal`] value. Dates at any granularity
//! (century down to a single day, ISO weeks, quarters and seasons) resolve to
//! a half-open range of days; times resolve to a tick count (100 ns) in UTC
//! when an offset was given; date-times resolve to a single instant. Values
//! then compare by where they sit in time rather than how they were spelled.
//!
//! ## Modules
//!
//! - [`parser`] — text → [`Temporal`], with [`ParseOptions`] for the extensions
//! - [`date`] — [`Date`] values and their day ranges
//! - [`time`] — [`Time`] values, fractional fields and UTC normalization
//! - [`datetime`] — [`DateTime`] values from a single-day date and a time
//! - [`calendar`] — ISO week, ordinal and sub-year grouping arithmetic
//! - [`value`] — the [`Temporal`] sum type
//! - [`format`] — canonical text for every value
//! - [`compare`] — equality, ordering, containment and overlap
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use iso8601_engine::{canonical, parse};
//!
//! let a = parse("2021-166").unwrap();
//! let b = parse("2021-W24-2").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(canonical(&b), "2021-W24-2");
//!
//! let quarter = parse("2021-34").unwrap();
//! assert!(quarter.contains(&a));
//! ```

pub mod calendar;
pub mod compare;
pub mod date;
pub mod datetime;
pub mod error;
pub mod format;
pub mod parser;
pub mod time;
pub mod value;

pub use calendar::SubYearGroup;
pub use date::{Date, Granularity};
pub use datetime::{from_date_and_time, DateTime};
pub use error::{ErrorKind, Iso8601Error};
pub use format::canonical;
pub use parser::{
    parse, parse_date, parse_date_with_options, parse_time, parse_with_options, ParseOptions,
};
pub use time::{Component, Time};
pub use value::{Kind, Temporal};
