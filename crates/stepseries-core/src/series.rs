//! Fixed-step, time-indexed series of `f64` samples.
//!
//! A [`TimeSeries`] is anchored at a `start` timestamp and spaced by a
//! positive `step`. Sample `i` lives at `start + i * step`; the series ends
//! (exclusively) at `start + len * step`.
//!
//! - Construction validates the step and the bounds (see [`SeriesError`]).
//! - Point reads and writes go through a truncating time-to-index mapping:
//!   a timestamp between two grid points addresses the earlier sample.
//! - Extension (`extend_to`, `extend_by`, `extend_with`) only ever appends.
//! - [`TimeSeries::transform`] derives a new, independent series.
//! - [`TimeSeries::iter`] and [`TimeSeries::iter_time_value`] walk the
//!   series one step at a time.
//!
//! ```
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use stepseries_core::series::TimeSeries;
//!
//! let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
//! let step = TimeDelta::minutes(1);
//!
//! let mut ts = TimeSeries::of_data("cpu", t0, step, &[0.5, 0.75, 0.25]).unwrap();
//! assert_eq!(ts.get_at(t0 + TimeDelta::seconds(90)), Some(0.75));
//!
//! ts.extend_by(TimeDelta::minutes(2));
//! assert_eq!(ts.len(), 5);
//! assert!(ts.get_at(t0 + TimeDelta::minutes(4)).unwrap().is_nan());
//! ```

pub mod error;
mod extend;
pub mod iter;

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, warn};
use snafu::ensure;

pub use error::{SeriesError, SeriesResult};
pub use iter::{Cursor, Iter, TimeValueIter};

use crate::{
    helpers::step_math::{shift, steps_in},
    step::format_step,
    transform::Transform,
};
use error::{NegativeStepSnafu, StartAfterEndSnafu, ZeroStepSnafu, ZeroStepSpanSnafu};

/// How the slots of a freshly built series are initialized.
#[derive(Clone, Copy)]
enum Seed<'a> {
    /// Every slot holds this value, which also becomes the filler.
    Filler(f64),
    /// Slots `0..samples.len()` take the samples; the filler is NaN.
    Samples(&'a [f64]),
}

/// An ordered sequence of `f64` samples evenly spaced in time.
///
/// The sample buffer is owned by the series and never handed out by
/// reference; [`TimeSeries::data`] returns a copy and `Clone` is a deep copy.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    key: String,
    start: DateTime<Utc>,
    step: TimeDelta,
    data: Vec<f64>,
    filler: f64,
}

impl TimeSeries {
    /// Primary constructor, following the "values" calling convention:
    ///
    /// - `start == None` anchors the series at the current time.
    /// - Exactly one value is a *filler*: every slot in `[start, end)` is
    ///   set to it, and it is used for later extensions.
    /// - Zero or several values *seed* the series positionally from index 0;
    ///   the filler is NaN. With no values at all every slot is NaN.
    /// - `end == None` means "unknown": the end becomes
    ///   `start + values.len() * step`, so the values alone decide the length.
    ///
    /// The length is `(end - start) / step`, truncated; an `end` that is not
    /// on the step grid yields a series ending *before* it.
    ///
    /// # Errors
    /// See [`SeriesError`]: zero or negative step, or `start > end`.
    pub fn new(
        key: impl Into<String>,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        step: TimeDelta,
        values: &[f64],
    ) -> SeriesResult<Self> {
        let seed = match values {
            [filler] => Seed::Filler(*filler),
            samples => Seed::Samples(samples),
        };
        Self::build(key.into(), start, end, step, seed)
    }

    /// Build a series over `[start, end)` with every slot set to `filler`.
    ///
    /// `filler` is also used for slots appended by later extensions.
    ///
    /// # Errors
    /// See [`SeriesError`].
    pub fn from_filler(
        key: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        step: TimeDelta,
        filler: f64,
    ) -> SeriesResult<Self> {
        Self::build(key.into(), Some(start), Some(end), step, Seed::Filler(filler))
    }

    /// Build a series seeded with `samples` from index 0.
    ///
    /// With `end == None` the series holds exactly `samples`. With an
    /// explicit `end`, samples past the computed length are dropped, and slots
    /// past the last sample are `0.0` (not the NaN filler). An empty `samples`
    /// leaves every slot NaN.
    ///
    /// # Errors
    /// See [`SeriesError`].
    pub fn from_samples(
        key: impl Into<String>,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
        step: TimeDelta,
        samples: &[f64],
    ) -> SeriesResult<Self> {
        Self::build(key.into(), Some(start), end, step, Seed::Samples(samples))
    }

    /// Build a filler series whose *inclusive* last sample sits at `end`.
    ///
    /// # Errors
    /// See [`SeriesError`].
    pub fn of_time_range(
        key: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        step: TimeDelta,
        filler: f64,
    ) -> SeriesResult<Self> {
        Self::from_filler(key, start, shift(end, step, 1), step, filler)
    }

    /// Build a filler series of exactly `length` samples.
    ///
    /// # Errors
    /// See [`SeriesError`].
    pub fn of_length(
        key: impl Into<String>,
        start: DateTime<Utc>,
        step: TimeDelta,
        length: usize,
        filler: f64,
    ) -> SeriesResult<Self> {
        let length = i64::try_from(length).unwrap_or(i64::MAX);
        Self::from_filler(key, start, shift(start, step, length), step, filler)
    }

    /// Build a series holding exactly `data`, starting at `start`.
    ///
    /// # Errors
    /// See [`SeriesError`].
    pub fn of_data(
        key: impl Into<String>,
        start: DateTime<Utc>,
        step: TimeDelta,
        data: &[f64],
    ) -> SeriesResult<Self> {
        Self::from_samples(key, start, None, step, data)
    }

    fn build(
        key: String,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        step: TimeDelta,
        seed: Seed<'_>,
    ) -> SeriesResult<Self> {
        let zero = TimeDelta::zero();
        ensure!(step != zero, ZeroStepSnafu);
        ensure!(step > zero, NegativeStepSnafu { step });

        let start = start.unwrap_or_else(Utc::now);
        let seeded = match seed {
            Seed::Filler(_) => 1,
            Seed::Samples(samples) => samples.len(),
        };
        let end =
            end.unwrap_or_else(|| shift(start, step, i64::try_from(seeded).unwrap_or(i64::MAX)));

        ensure!(start <= end, StartAfterEndSnafu { start, end });
        ensure!(start == end || step != zero, ZeroStepSpanSnafu { start, end });

        // start <= end and step > 0, so the count is never negative.
        let size = usize::try_from(steps_in(end - start, step)).unwrap_or(0);

        let (data, filler) = match seed {
            Seed::Filler(filler) => (vec![filler; size], filler),
            Seed::Samples(samples) => {
                if samples.len() > size {
                    warn!(
                        "series {key}: {} samples supplied but [{start}, {end}) holds {size}; extra samples dropped",
                        samples.len()
                    );
                }
                let pad = if samples.is_empty() { f64::NAN } else { 0.0 };
                let mut data = vec![pad; size];
                let seeded = samples.len().min(size);
                data[..seeded].copy_from_slice(&samples[..seeded]);
                (data, f64::NAN)
            }
        };

        debug!(
            "created series {key}: start={start} step={} len={size}",
            format_step(step)
        );

        Ok(Self {
            key,
            start,
            step,
            data,
            filler,
        })
    }

    /// The series label.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the series label.
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    /// Timestamp of sample 0.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive end: `start + len * step`.
    pub fn end(&self) -> DateTime<Utc> {
        self.timestamp_at(self.data.len())
    }

    /// Spacing between consecutive samples.
    pub fn step(&self) -> TimeDelta {
        self.step
    }

    /// Value used for slots appended without explicit data.
    pub fn filler(&self) -> f64 {
        self.filler
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the series holds no samples (`start == end`).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// An independent copy of all samples, in order.
    pub fn data(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Timestamp of grid slot `index` (`start + index * step`).
    ///
    /// `index` may be `len()` or beyond; no bounds check is made.
    pub fn timestamp_at(&self, index: usize) -> DateTime<Utc> {
        shift(
            self.start,
            self.step,
            i64::try_from(index).unwrap_or(i64::MAX),
        )
    }

    /// Whether `self` and `other` use exactly the same step.
    pub fn is_equal_step(&self, other: &TimeSeries) -> bool {
        self.step == other.step
    }

    /// Map `t` to a sample index, truncating between grid points.
    ///
    /// `None` if `t` precedes `start` or follows the last sample's timestamp.
    fn index(&self, t: DateTime<Utc>) -> Option<usize> {
        if t < self.start {
            return None;
        }
        let last = self.data.len().checked_sub(1)?;
        if t > self.timestamp_at(last) {
            return None;
        }
        usize::try_from(steps_in(t - self.start, self.step)).ok()
    }

    /// The sample addressed by `t`, or `None` if `t` is out of range.
    pub fn get_at(&self, t: DateTime<Utc>) -> Option<f64> {
        self.index(t).and_then(|i| self.data.get(i).copied())
    }

    /// Like [`TimeSeries::get_at`], with NaN standing in for "not found".
    pub fn get_at_or_nan(&self, t: DateTime<Utc>) -> f64 {
        self.get_at(t).unwrap_or(f64::NAN)
    }

    /// Overwrite the sample addressed by `t`.
    ///
    /// Returns `false` and leaves the series untouched if `t` is out of range.
    pub fn set_at(&mut self, t: DateTime<Utc>, value: f64) -> bool {
        match self.index(t).and_then(|i| self.data.get_mut(i)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Derive a new series by applying `transform` to every sample.
    ///
    /// The result keeps `start`, `step` and `filler`, and is keyed
    /// `"<name>(<key>)"`. `self` is not modified.
    pub fn transform<T>(&self, transform: &T) -> TimeSeries
    where
        T: Transform + ?Sized,
    {
        TimeSeries {
            key: format!("{}({})", transform.name(), self.key),
            start: self.start,
            step: self.step,
            data: self.data.iter().map(|&v| transform.transform(v)).collect(),
            filler: self.filler,
        }
    }

    /// Iterate over sample values from `start`.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Iterate over `(timestamp, value)` pairs from `start`.
    pub fn iter_time_value(&self) -> TimeValueIter<'_> {
        TimeValueIter::new(self)
    }
}

/// Samples compare by bit pattern (`f64::total_cmp`), so a NaN-filled series
/// equals its own clone.
impl PartialEq for TimeSeries {
    fn eq(&self, other: &Self) -> bool {
        let same = |a: &f64, b: &f64| a.total_cmp(b).is_eq();

        self.key == other.key
            && self.start == other.start
            && self.step == other.step
            && same(&self.filler, &other.filler)
            && self.data.len() == other.data.len()
            && self.data.iter().zip(&other.data).all(|(a, b)| same(a, b))
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = f64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `<key> Start: <start> End: <end> Step: <step> Length: <n> <v0>,<v1>,...`
///
/// Values use two decimals. For diagnostics only; there is no parser.
impl fmt::Display for TimeSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Start: {} End: {} Step: {} Length: {}",
            self.key,
            self.start,
            self.end(),
            format_step(self.step),
            self.data.len()
        )?;

        for (i, v) in self.data.iter().enumerate() {
            let sep = if i == 0 { ' ' } else { ',' };
            write!(f, "{sep}{v:.2}")?;
        }
        Ok(())
    }
}
