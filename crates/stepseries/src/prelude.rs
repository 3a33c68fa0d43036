//! Wrapper prelude.
//!
//! The `stepseries` crate is the supported public entry point. Downstream
//! code should prefer importing from this prelude instead of depending on
//! internal core module paths.

pub use crate::transform::{Abs, FillNan, Offset, Scale, Transform, from_fn};
pub use crate::{
    Cursor, ParseStepError, SeriesError, SeriesResult, TimeSeries, format_step, parse_step,
};
