//! # stepseries
//!
//! Fixed-step, time-indexed numeric series.
//!
//! This crate is the supported public entry point and provides a small,
//! stable surface over `stepseries-core`.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use stepseries::prelude::*;
//!
//! let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let step = parse_step("1h").unwrap();
//!
//! let mut temps = TimeSeries::of_data("temp", t0, step, &[18.5, 19.0, -1.5]).unwrap();
//! temps.extend_to(t0 + step * 4);
//!
//! let cleaned = temps.transform(&FillNan(0.0)).transform(&Abs);
//! assert_eq!(cleaned.key(), "abs(fill_nan(temp))");
//! assert_eq!(cleaned.data(), vec![18.5, 19.0, 1.5, 0.0, 0.0]);
//!
//! let mut it = cleaned.iter_time_value();
//! assert_eq!(it.seek_last(), Some((t0 + step * 4, 0.0)));
//! ```

/// Convenience prelude with the stable, supported surface.
pub mod prelude;

/// Per-sample transforms (wrapper-only).
pub mod transform {
    pub use stepseries_core::transform::{
        Abs, FillNan, FnTransform, Offset, Scale, Transform, from_fn,
    };
}

pub use stepseries_core::series::{
    Cursor, Iter, SeriesError, SeriesResult, TimeSeries, TimeValueIter,
};
pub use stepseries_core::step::{ParseStepError, format_step, parse_step};
