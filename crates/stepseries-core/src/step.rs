//! Human-friendly step specs (for example `15m`, `1h`, `250ms`).
//!
//! A step spec is a positive integer followed by a unit suffix. Parsing
//! produces a `chrono::TimeDelta` that can be handed to any series
//! constructor; formatting picks the largest unit that divides the step
//! evenly, so `format_step(parse_step(s)?)` is a canonical form of `s`.
//!
//! Accepted units (case-insensitive):
//!
//! | unit | aliases                              |
//! |------|--------------------------------------|
//! | ns   | `nanos`, `nanosecond(s)`             |
//! | us   | `µs`, `micros`, `microsecond(s)`     |
//! | ms   | `millis`, `millisecond(s)`           |
//! | s    | `sec`, `secs`, `second(s)`           |
//! | m    | `min`, `mins`, `minute(s)`           |
//! | h    | `hr`, `hrs`, `hour(s)`               |
//! | d    | `day`, `days`                        |

use chrono::TimeDelta;
use snafu::prelude::*;

use crate::helpers::step_math::{delta_from_nanos, total_nanos};

const NANOS_PER_MICRO: i128 = 1_000;
const NANOS_PER_MILLI: i128 = 1_000_000;
const NANOS_PER_SEC: i128 = 1_000_000_000;
const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: i128 = 24 * NANOS_PER_HOUR;

/// Units tried by [`format_step`], largest first.
const FORMAT_UNITS: [(&str, i128); 7] = [
    ("d", NANOS_PER_DAY),
    ("h", NANOS_PER_HOUR),
    ("m", NANOS_PER_MINUTE),
    ("s", NANOS_PER_SEC),
    ("ms", NANOS_PER_MILLI),
    ("us", NANOS_PER_MICRO),
    ("ns", 1),
];

/// Errors produced when parsing a step spec (e.g. `15m`).
#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum ParseStepError {
    /// The spec string was empty or only whitespace.
    #[snafu(display("step spec is empty"))]
    Empty,

    /// The spec did not include a numeric value.
    #[snafu(display("step spec '{spec}' is missing a numeric value"))]
    MissingNumber {
        /// The step spec as given (trimmed).
        spec: String,
    },

    /// The spec did not include a unit suffix.
    #[snafu(display(
        "step spec '{spec}' is missing a unit suffix (expected ns|us|ms|s|m|h|d)"
    ))]
    MissingUnit {
        /// The step spec as given (trimmed).
        spec: String,
    },

    /// The numeric portion of the spec failed to parse.
    #[snafu(display("invalid step value in '{spec}': {source}"))]
    InvalidNumber {
        /// The step spec as given (trimmed).
        spec: String,
        /// The parse error returned by `u64::from_str`.
        source: std::num::ParseIntError,
    },

    /// The parsed numeric value was zero.
    #[snafu(display("step value must be > 0 (got {value}) in '{spec}'"))]
    NonPositive {
        /// The step spec as given (trimmed).
        spec: String,
        /// The parsed numeric value.
        value: u64,
    },

    /// The resulting duration does not fit in a `TimeDelta`.
    #[snafu(display("step '{spec}' is too large to represent"))]
    TooLarge {
        /// The step spec as given (trimmed).
        spec: String,
    },

    /// The spec used an unsupported unit suffix.
    #[snafu(display("unknown step unit '{unit}' in '{spec}' (expected ns|us|ms|s|m|h|d)"))]
    UnknownUnit {
        /// The step spec as given (trimmed).
        spec: String,
        /// The unrecognized unit suffix.
        unit: String,
    },
}

fn unit_nanos(unit: &str) -> Option<i128> {
    let nanos = match unit {
        "ns" | "nano" | "nanos" | "nanosecond" | "nanoseconds" => 1,
        "us" | "µs" | "micro" | "micros" | "microsecond" | "microseconds" => NANOS_PER_MICRO,
        "ms" | "milli" | "millis" | "millisecond" | "milliseconds" => NANOS_PER_MILLI,
        "s" | "sec" | "secs" | "second" | "seconds" => NANOS_PER_SEC,
        "m" | "min" | "mins" | "minute" | "minutes" => NANOS_PER_MINUTE,
        "h" | "hr" | "hrs" | "hour" | "hours" => NANOS_PER_HOUR,
        "d" | "day" | "days" => NANOS_PER_DAY,
        _ => return None,
    };
    Some(nanos)
}

/// Parse a step spec such as `30s`, `15m`, `1h` or `250ms`.
///
/// # Errors
/// Returns [`ParseStepError`] if the spec is empty, missing a number or a
/// unit, has an invalid or zero number, uses an unknown unit, or describes a
/// duration too large for `TimeDelta`.
pub fn parse_step(input: &str) -> Result<TimeDelta, ParseStepError> {
    let spec = input.trim();
    ensure!(!spec.is_empty(), EmptySnafu);

    // Numeric prefix + unit suffix; the unit starts at the first non-digit.
    let unit_start = spec
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit() && !c.is_whitespace())
        .map(|(i, _)| i);

    let Some(unit_start) = unit_start else {
        return MissingUnitSnafu { spec }.fail();
    };
    ensure!(unit_start > 0, MissingNumberSnafu { spec });

    let (num_str, unit_str) = spec.split_at(unit_start);
    let value: u64 = num_str
        .trim()
        .parse()
        .context(InvalidNumberSnafu { spec })?;
    ensure!(value > 0, NonPositiveSnafu { spec, value });

    let unit = unit_str.trim().to_lowercase();
    let Some(per_unit) = unit_nanos(&unit) else {
        return UnknownUnitSnafu {
            spec,
            unit: unit_str.trim(),
        }
        .fail();
    };

    delta_from_nanos(i128::from(value) * per_unit).context(TooLargeSnafu { spec })
}

/// Render a step in its compact spec form, using the largest unit that
/// divides it evenly (`90s` stays `90s`, `3600s` becomes `1h`).
///
/// Negative durations get a leading `-`; a zero duration renders as `0s`.
pub fn format_step(step: TimeDelta) -> String {
    let nanos = total_nanos(step);
    if nanos == 0 {
        return "0s".to_string();
    }

    let sign = if nanos < 0 { "-" } else { "" };
    let magnitude = nanos.abs();
    let (unit, per_unit) = FORMAT_UNITS
        .iter()
        .copied()
        .find(|(_, per_unit)| magnitude % per_unit == 0)
        .unwrap_or(("ns", 1));

    format!("{sign}{}{unit}", magnitude / per_unit)
}
