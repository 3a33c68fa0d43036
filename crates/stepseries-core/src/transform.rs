//! Named, pure per-sample transforms.
//!
//! A [`Transform`] maps one `f64` to another and carries a name. Applying it
//! through [`TimeSeries::transform`](crate::series::TimeSeries::transform)
//! yields a derived series keyed `"<name>(<source key>)"`.
//!
//! Transforms see one sample at a time: no neighbours, no windows, no state.
//! Closures are adapted with [`from_fn`]; a few common mappings ship as
//! unit/newtype structs.

use std::fmt;

/// A named mapping from one sample value to another.
pub trait Transform {
    /// Name used to build the derived series key.
    fn name(&self) -> &str;

    /// Map a single sample.
    fn transform(&self, value: f64) -> f64;
}

impl<T: Transform + ?Sized> Transform for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn transform(&self, value: f64) -> f64 {
        (**self).transform(value)
    }
}

impl<T: Transform + ?Sized> Transform for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn transform(&self, value: f64) -> f64 {
        (**self).transform(value)
    }
}

/// A [`Transform`] backed by a closure. Built with [`from_fn`].
#[derive(Clone)]
pub struct FnTransform<F> {
    name: String,
    f: F,
}

impl<F> fmt::Debug for FnTransform<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTransform")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<F> Transform for FnTransform<F>
where
    F: Fn(f64) -> f64,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn transform(&self, value: f64) -> f64 {
        (self.f)(value)
    }
}

/// Wrap `f` as a transform called `name`.
///
/// ```
/// use stepseries_core::transform::{Transform, from_fn};
///
/// let square = from_fn("square", |v| v * v);
/// assert_eq!(square.name(), "square");
/// assert_eq!(square.transform(3.0), 9.0);
/// ```
pub fn from_fn<F>(name: impl Into<String>, f: F) -> FnTransform<F>
where
    F: Fn(f64) -> f64,
{
    FnTransform {
        name: name.into(),
        f,
    }
}

/// Absolute value. Named `abs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Abs;

impl Transform for Abs {
    fn name(&self) -> &str {
        "abs"
    }

    fn transform(&self, value: f64) -> f64 {
        value.abs()
    }
}

/// Multiply by a constant factor. Named `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(pub f64);

impl Transform for Scale {
    fn name(&self) -> &str {
        "scale"
    }

    fn transform(&self, value: f64) -> f64 {
        value * self.0
    }
}

/// Add a constant. Named `offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset(pub f64);

impl Transform for Offset {
    fn name(&self) -> &str {
        "offset"
    }

    fn transform(&self, value: f64) -> f64 {
        value + self.0
    }
}

/// Replace NaN ("unknown") samples with a constant. Named `fill_nan`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillNan(pub f64);

impl Transform for FillNan {
    fn name(&self) -> &str {
        "fill_nan"
    }

    fn transform(&self, value: f64) -> f64 {
        if value.is_nan() { self.0 } else { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names() {
        assert_eq!(Abs.name(), "abs");
        assert_eq!(Scale(2.0).name(), "scale");
        assert_eq!(Offset(1.0).name(), "offset");
        assert_eq!(FillNan(0.0).name(), "fill_nan");
    }

    #[test]
    fn builtin_mappings() {
        assert_eq!(Abs.transform(-2.5), 2.5);
        assert_eq!(Scale(-3.0).transform(2.0), -6.0);
        assert_eq!(Offset(0.5).transform(1.0), 1.5);
        assert_eq!(FillNan(7.0).transform(f64::NAN), 7.0);
        assert_eq!(FillNan(7.0).transform(1.0), 1.0);
    }

    #[test]
    fn nan_passes_through_arithmetic_transforms() {
        assert!(Abs.transform(f64::NAN).is_nan());
        assert!(Scale(2.0).transform(f64::NAN).is_nan());
        assert!(Offset(2.0).transform(f64::NAN).is_nan());
    }

    #[test]
    fn closure_transform() {
        let clamp = from_fn("clamp01", |v: f64| v.clamp(0.0, 1.0));
        assert_eq!(clamp.name(), "clamp01");
        assert_eq!(clamp.transform(1.7), 1.0);
        assert_eq!(clamp.transform(-0.2), 0.0);
        assert!(format!("{clamp:?}").contains("clamp01"));
    }

    #[test]
    fn references_and_boxes_forward() {
        let boxed: Box<dyn Transform> = Box::new(Scale(10.0));
        assert_eq!(boxed.name(), "scale");
        assert_eq!(boxed.transform(0.5), 5.0);

        let by_ref = &Abs;
        assert_eq!(Transform::transform(&by_ref, -1.0), 1.0);
    }
}
