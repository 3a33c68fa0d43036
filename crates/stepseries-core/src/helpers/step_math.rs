//! Helpers for mapping timestamps onto a fixed step grid.
//!
//! These helpers are intentionally independent of [`crate::series`].
//! They define the integer arithmetic every series operation relies on:
//!
//! - All durations are converted to signed nanoseconds (`i128`) before
//!   dividing, so `index -> timestamp -> index` never drifts.
//! - Division truncates toward zero. A span that is not an exact multiple
//!   of the step yields the count of *whole* steps it contains.
//! - Shifting a timestamp saturates at the representable `DateTime<Utc>`
//!   range instead of panicking.

use chrono::{DateTime, TimeDelta, Utc};

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Total length of `delta` in nanoseconds.
///
/// `num_seconds` truncates toward zero and `subsec_nanos` carries the same
/// sign, so their sum is exact for negative deltas too.
pub fn total_nanos(delta: TimeDelta) -> i128 {
    i128::from(delta.num_seconds()) * NANOS_PER_SEC + i128::from(delta.subsec_nanos())
}

/// Build a `TimeDelta` from signed nanoseconds.
///
/// Returns `None` if the value does not fit in a `TimeDelta`.
pub fn delta_from_nanos(nanos: i128) -> Option<TimeDelta> {
    let secs = i64::try_from(nanos.div_euclid(NANOS_PER_SEC)).ok()?;
    // rem_euclid keeps the remainder in [0, 1e9), as TimeDelta::new expects.
    let rem = u32::try_from(nanos.rem_euclid(NANOS_PER_SEC)).ok()?;
    TimeDelta::new(secs, rem)
}

/// Number of whole `step`s contained in `span`, truncated toward zero.
///
/// The caller guarantees `step` is non-zero. Results beyond `i64` clamp to
/// `i64::MIN` / `i64::MAX`.
pub fn steps_in(span: TimeDelta, step: TimeDelta) -> i64 {
    steps_in_nanos(total_nanos(span), step)
}

/// Like [`steps_in`], with the span already in nanoseconds.
///
/// Lets callers add durations in `i128` first, where chrono's
/// `TimeDelta + TimeDelta` would panic on overflow.
pub fn steps_in_nanos(span_nanos: i128, step: TimeDelta) -> i64 {
    let step_nanos = total_nanos(step);
    debug_assert!(step_nanos != 0, "steps_in called with a zero step");
    if step_nanos == 0 {
        return 0;
    }

    let quotient = span_nanos / step_nanos;
    i64::try_from(quotient).unwrap_or(if quotient < 0 { i64::MIN } else { i64::MAX })
}

/// `n * step`, saturating at `TimeDelta::MIN` / `TimeDelta::MAX`.
pub fn step_offset(step: TimeDelta, n: i64) -> TimeDelta {
    let nanos = total_nanos(step) * i128::from(n);
    delta_from_nanos(nanos).unwrap_or(if nanos < 0 {
        TimeDelta::MIN
    } else {
        TimeDelta::MAX
    })
}

/// Shift `ts` by `n` steps, saturating at the `DateTime<Utc>` bounds.
pub fn shift(ts: DateTime<Utc>, step: TimeDelta, n: i64) -> DateTime<Utc> {
    let offset = step_offset(step, n);
    ts.checked_add_signed(offset).unwrap_or(if offset < TimeDelta::zero() {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}
