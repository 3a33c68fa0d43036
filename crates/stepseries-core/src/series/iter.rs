//! Step-by-step cursors over a [`TimeSeries`].
//!
//! [`Cursor`] holds nothing but a timestamp position. Each read looks up the
//! sample at that position with the same out-of-range contract as
//! [`TimeSeries::get_at`] and then moves one step forward, whether or not the
//! read found a sample. Once past the end, every later read misses; a cursor
//! is never rewound to `start` (create a new one instead).
//!
//! [`Iter`] and [`TimeValueIter`] pair a cursor with a borrowed series and
//! implement [`Iterator`]. Because a bare `Cursor` does not borrow, it can be
//! driven across mutations: a series extended between two reads is observed
//! on the next read.

use chrono::{DateTime, Utc};

use super::TimeSeries;
use crate::helpers::step_math::shift;

/// A position on a series' step grid, advanced one step per read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: DateTime<Utc>,
}

impl Cursor {
    /// A cursor positioned at `series.start()`.
    pub fn new(series: &TimeSeries) -> Self {
        Self {
            position: series.start(),
        }
    }

    /// The timestamp the next read will look at.
    pub fn position(&self) -> DateTime<Utc> {
        self.position
    }

    /// Read at the current position, then move one step forward.
    ///
    /// Returns the position that was read together with the sample, if any.
    pub fn advance(&mut self, series: &TimeSeries) -> (DateTime<Utc>, Option<f64>) {
        let at = self.position;
        let value = series.get_at(at);
        self.position = shift(at, series.step(), 1);
        (at, value)
    }

    /// Move to the final sample (`end - step`) and read it.
    ///
    /// Does not advance, so repeated calls return the same sample.
    pub fn seek_last(&mut self, series: &TimeSeries) -> (DateTime<Utc>, Option<f64>) {
        self.position = shift(series.end(), series.step(), -1);
        (self.position, series.get_at(self.position))
    }
}

/// Iterator over sample values, created by [`TimeSeries::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    series: &'a TimeSeries,
    cursor: Cursor,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(series: &'a TimeSeries) -> Self {
        Self {
            series,
            cursor: Cursor::new(series),
        }
    }

    /// The timestamp the next call to `next` will read.
    pub fn position(&self) -> DateTime<Utc> {
        self.cursor.position()
    }

    /// Jump to the final sample and return it; `None` for an empty series.
    pub fn seek_last(&mut self) -> Option<f64> {
        self.cursor.seek_last(self.series).1
    }
}

impl Iterator for Iter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.advance(self.series).1
    }
}

/// Iterator over `(timestamp, value)` pairs, created by
/// [`TimeSeries::iter_time_value`].
///
/// The timestamp is the cursor position *before* the step forward.
#[derive(Debug, Clone)]
pub struct TimeValueIter<'a> {
    series: &'a TimeSeries,
    cursor: Cursor,
}

impl<'a> TimeValueIter<'a> {
    pub(crate) fn new(series: &'a TimeSeries) -> Self {
        Self {
            series,
            cursor: Cursor::new(series),
        }
    }

    /// The timestamp the next call to `next` will read.
    pub fn position(&self) -> DateTime<Utc> {
        self.cursor.position()
    }

    /// Jump to the final sample and return it with its timestamp.
    pub fn seek_last(&mut self) -> Option<(DateTime<Utc>, f64)> {
        let (at, value) = self.cursor.seek_last(self.series);
        value.map(|v| (at, v))
    }
}

impl Iterator for TimeValueIter<'_> {
    type Item = (DateTime<Utc>, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let (at, value) = self.cursor.advance(self.series);
        value.map(|v| (at, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
    }

    fn series(values: &[f64]) -> TimeSeries {
        TimeSeries::of_data("x", t0(), TimeDelta::seconds(10), values).unwrap()
    }

    #[test]
    fn iter_yields_data_then_none() {
        let ts = series(&[1.0, 2.0, 3.0]);
        let mut it = ts.iter();

        assert_eq!(it.next(), Some(1.0));
        assert_eq!(it.next(), Some(2.0));
        assert_eq!(it.next(), Some(3.0));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        // The cursor keeps moving even after the end.
        assert_eq!(it.position(), t0() + TimeDelta::seconds(50));
    }

    #[test]
    fn iter_collects_like_data() {
        let ts = series(&[4.0, 5.0, 6.0, 7.0]);
        assert_eq!(ts.iter().collect::<Vec<_>>(), ts.data());

        let mut sum = 0.0;
        for v in &ts {
            sum += v;
        }
        assert_eq!(sum, 22.0);
    }

    #[test]
    fn seek_last_is_idempotent() {
        let ts = series(&[1.0, 2.0, 3.0]);
        let mut it = ts.iter();

        assert_eq!(it.seek_last(), Some(3.0));
        assert_eq!(it.seek_last(), Some(3.0));
        // seek_last does not advance: next reads the last sample again.
        assert_eq!(it.next(), Some(3.0));
        assert_eq!(it.next(), None);
        // And it can pull an exhausted iterator back.
        assert_eq!(it.seek_last(), Some(3.0));
    }

    #[test]
    fn seek_last_on_empty_series() {
        let ts = series(&[]);
        assert_eq!(ts.iter().seek_last(), None);
        assert_eq!(ts.iter_time_value().seek_last(), None);
        assert_eq!(ts.iter().next(), None);
    }

    #[test]
    fn time_value_iter_reports_position_before_step() {
        let ts = series(&[1.5, 2.5]);
        let pairs: Vec<_> = ts.iter_time_value().collect();

        assert_eq!(
            pairs,
            vec![(t0(), 1.5), (t0() + TimeDelta::seconds(10), 2.5)]
        );
    }

    #[test]
    fn time_value_seek_last() {
        let ts = series(&[1.5, 2.5, 3.5]);
        let mut it = ts.iter_time_value();

        assert_eq!(
            it.seek_last(),
            Some((t0() + TimeDelta::seconds(20), 3.5))
        );
        assert_eq!(it.position(), t0() + TimeDelta::seconds(20));
    }

    #[test]
    fn cursor_reports_misses_with_their_position() {
        let ts = series(&[1.0]);
        let mut cursor = Cursor::new(&ts);

        assert_eq!(cursor.advance(&ts), (t0(), Some(1.0)));
        assert_eq!(
            cursor.advance(&ts),
            (t0() + TimeDelta::seconds(10), None)
        );
    }

    #[test]
    fn cursor_observes_extension() {
        let mut ts = series(&[1.0]);
        let mut cursor = Cursor::new(&ts);

        assert_eq!(cursor.advance(&ts).1, Some(1.0));
        assert_eq!(cursor.advance(&ts).1, None);

        // Grow past the cursor; it already moved beyond index 1, so the next
        // read lands on index 2.
        ts.extend_with([2.0, 3.0]);
        assert_eq!(cursor.advance(&ts).1, Some(3.0));
        assert_eq!(cursor.seek_last(&ts).1, Some(3.0));
    }

    #[test]
    fn cursor_sees_writes_between_reads() {
        let mut ts = series(&[1.0, 2.0]);
        let mut cursor = Cursor::new(&ts);

        assert!(ts.set_at(t0(), 10.0));
        assert_eq!(cursor.advance(&ts).1, Some(10.0));
    }
}
