//! Evaluation of one input line into JSON-serializable reports.
//!
//! An input is a `;`-separated list of items. An item is either a single
//! spec, which is parsed and canonicalized, or two specs joined by `^` or
//! `∧`, whose relations are computed.

use iso8601_engine::{parse_with_options, ErrorKind, Iso8601Error, ParseOptions, Temporal};
use serde::Serialize;
use tracing::{debug, info};

const LIST_SEPARATOR: char = ';';
const CONJUNCTIONS: [char; 2] = ['^', '∧'];

const CANNOT_COMPUTE: &str = "Cannot compute input";

/// The outcome of one list item.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    Parsed {
        input: String,
        canonical: String,
        value: Temporal,
    },
    Compared {
        input: String,
        left: String,
        right: String,
        relations: Relations,
    },
    Failed {
        input: String,
        message: &'static str,
        detail: String,
    },
}

/// Relations between two operands. Only the relations defined for the
/// operand kinds are present.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct Relations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_contained_by: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equals: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_before: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_after: Option<bool>,
}

/// User-facing message for a parse failure.
pub fn message(err: &Iso8601Error) -> &'static str {
    match err.kind() {
        ErrorKind::Format => "Cannot parse input",
        ErrorKind::Range => "Invalid input",
        ErrorKind::Unsupported => "Not implemented",
    }
}

/// Evaluates every item of a `;`-separated input. Separators at either end
/// are ignored; a blank item between two separators is reported as a parse
/// failure.
pub fn evaluate(input: &str, options: &ParseOptions) -> Vec<Report> {
    info!(input, "evaluating");
    let items = if input.contains(LIST_SEPARATOR) {
        input.trim_matches(LIST_SEPARATOR)
    } else {
        input
    };
    items
        .split(LIST_SEPARATOR)
        .map(|item| evaluate_item(item.trim(), options))
        .collect()
}

fn evaluate_item(item: &str, options: &ParseOptions) -> Report {
    if !item.contains(CONJUNCTIONS) {
        return match parse_with_options(item, options) {
            Ok(value) => Report::Parsed {
                input: item.to_string(),
                canonical: value.to_string(),
                value,
            },
            Err(err) => failed(item, &err),
        };
    }

    let operands: Vec<&str> = item.split(CONJUNCTIONS).map(str::trim).collect();
    let [left, right] = operands[..] else {
        return Report::Failed {
            input: item.to_string(),
            message: CANNOT_COMPUTE,
            detail: format!("expected two operands, found {}", operands.len()),
        };
    };

    let left = match parse_with_options(left, options) {
        Ok(value) => value,
        Err(err) => return operand_failed(item, left, &err),
    };
    let right = match parse_with_options(right, options) {
        Ok(value) => value,
        Err(err) => return operand_failed(item, right, &err),
    };

    match relate(&left, &right) {
        Some(relations) => {
            debug!(item, ?relations, "compared");
            Report::Compared {
                input: item.to_string(),
                left: left.to_string(),
                right: right.to_string(),
                relations,
            }
        }
        None => Report::Failed {
            input: item.to_string(),
            message: CANNOT_COMPUTE,
            detail: format!("cannot compare a {} with a {}", left.kind(), right.kind()),
        },
    }
}

fn failed(item: &str, err: &Iso8601Error) -> Report {
    debug!(item, error = %err, "parse failed");
    Report::Failed {
        input: item.to_string(),
        message: message(err),
        detail: err.to_string(),
    }
}

/// A conjunction with an unparsable operand has nothing to compare.
fn operand_failed(item: &str, operand: &str, err: &Iso8601Error) -> Report {
    debug!(item, operand, error = %err, "operand failed to parse");
    Report::Failed {
        input: item.to_string(),
        message: CANNOT_COMPUTE,
        detail: format!("operand '{operand}': {}: {err}", message(err)),
    }
}

/// Relations defined for the operand kinds, or `None` when the pairing has
/// none.
pub fn relate(left: &Temporal, right: &Temporal) -> Option<Relations> {
    match (left, right) {
        (Temporal::Date(_), Temporal::Date(_)) => Some(Relations {
            contains: Some(left.contains(right)),
            is_contained_by: Some(right.contains(left)),
            overlaps: Some(left.overlaps(right)),
            equals: Some(left == right),
            ..Relations::default()
        }),
        (Temporal::Date(_), Temporal::DateTime(_)) => Some(Relations {
            contains: Some(left.contains(right)),
            ..Relations::default()
        }),
        (Temporal::DateTime(_), Temporal::Date(_)) => Some(Relations {
            contains: Some(right.contains(left)),
            ..Relations::default()
        }),
        (Temporal::Time(_), Temporal::Time(_)) | (Temporal::DateTime(_), Temporal::DateTime(_)) => {
            Some(Relations {
                equals: Some(left == right),
                is_before: Some(left < right),
                is_after: Some(left > right),
                ..Relations::default()
            })
        }
        _ => None,
    }
}
