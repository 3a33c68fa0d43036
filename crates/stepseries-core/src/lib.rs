//! Core engine for fixed-step, time-indexed numeric series.
//!
//! This crate provides the foundational pieces for `stepseries`:
//!
//! - A [`TimeSeries`] container: `f64` samples evenly spaced by a fixed
//!   step from a start timestamp, with point lookup/update by time and
//!   in-place range extension (`series` module).
//! - Pluggable, named per-sample [`Transform`]s that derive new series
//!   without touching the source (`transform` module).
//! - Cursors and iterators that walk a series one step at a time
//!   (`series::iter` module).
//! - Human-friendly step specs such as `15m` or `250ms` (`step` module).
//!
//! Everything is single-threaded value semantics: a series owns its
//! samples and provides no internal synchronization.
#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
pub mod helpers;
pub mod series;
pub mod step;
pub mod transform;

pub use series::{Cursor, Iter, SeriesError, SeriesResult, TimeSeries, TimeValueIter};
pub use step::{ParseStepError, format_step, parse_step};
pub use transform::{Abs, FillNan, FnTransform, Offset, Scale, Transform, from_fn};
