//! Error types and SNAFU context selectors for series construction.
//!
//! Construction is the only fallible part of the series API; every other
//! operation reports "not found" / "not applied" through its return value.

use chrono::{DateTime, TimeDelta, Utc};
use snafu::prelude::*;

/// Errors returned by the [`TimeSeries`](crate::series::TimeSeries) constructors.
#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum SeriesError {
    /// The step duration was zero.
    #[snafu(display("step can't be 0"))]
    ZeroStep,

    /// The step duration was negative.
    #[snafu(display("step must be positive, got {step}"))]
    NegativeStep {
        /// The rejected step.
        step: TimeDelta,
    },

    /// The requested start lies after the requested end.
    #[snafu(display("start time {start} can't be after end time {end}"))]
    StartAfterEnd {
        /// Requested start timestamp.
        start: DateTime<Utc>,
        /// Requested end timestamp.
        end: DateTime<Utc>,
    },

    /// A non-empty span was requested with a zero step.
    ///
    /// `ZeroStep` is checked first, so this only surfaces if that check is
    /// ever relaxed; it is kept as its own variant so callers can match on it.
    #[snafu(display("step size can't be 0 if start ({start}) != end ({end})"))]
    ZeroStepSpan {
        /// Requested start timestamp.
        start: DateTime<Utc>,
        /// Requested end timestamp.
        end: DateTime<Utc>,
    },
}

/// Convenience alias for results of series construction.
pub type SeriesResult<T> = Result<T, SeriesError>;
