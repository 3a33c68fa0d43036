//! In-place range extension.
//!
//! All three operations append to the end of the sample buffer. The key,
//! start and step never change, so every existing sample keeps its
//! timestamp. Counts derived from durations truncate toward zero, and a
//! non-positive count appends nothing.

use chrono::{DateTime, TimeDelta, Utc};
use log::trace;

use super::TimeSeries;
use crate::helpers::step_math::{steps_in, steps_in_nanos, total_nanos};

impl TimeSeries {
    /// Grow the series with filler samples so that `t` is covered.
    ///
    /// No-op if `t` precedes the current end. Otherwise appends
    /// `(t + step - end) / step` filler samples; for `t` on the step grid the
    /// last new sample sits exactly at `t`.
    pub fn extend_to(&mut self, t: DateTime<Utc>) {
        let end = self.end();
        if t < end {
            return;
        }
        let span = total_nanos(t - end) + total_nanos(self.step);
        self.push_filler(steps_in_nanos(span, self.step));
    }

    /// Append `d / step` filler samples (truncated).
    pub fn extend_by(&mut self, d: TimeDelta) {
        self.push_filler(steps_in(d, self.step));
    }

    /// Append `values` verbatim, in order.
    pub fn extend_with<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = f64>,
    {
        let before = self.data.len();
        self.data.extend(values);
        trace!(
            "series {}: appended {} samples",
            self.key,
            self.data.len() - before
        );
    }

    fn push_filler(&mut self, points: i64) {
        let Ok(points) = usize::try_from(points) else {
            trace!("series {}: ignoring extension by {points} points", self.key);
            return;
        };
        self.data.resize(self.data.len() + points, self.filler);
        trace!(
            "series {}: appended {points} filler samples, len={}",
            self.key,
            self.data.len()
        );
    }
}
