//! Low-level helpers shared by the series modules.
//!
//! Current helpers:
//! - Step-grid arithmetic (`step_math`): exact nanosecond division and
//!   saturating timestamp shifts used by indexing, extension and cursors.
pub mod step_math;
