//! Parametric curve records.

use crate::bounds::Bounds;

/// One row of a parametric curve: the parameter and the point it maps to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveSample {
    /// Curve parameter (usually time).
    pub t: f64,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl CurveSample {
    /// Build a sample from its three components.
    pub fn new(t: f64, x: f64, y: f64) -> Self {
        Self { t, x, y }
    }
}

impl From<(f64, f64, f64)> for CurveSample {
    fn from((t, x, y): (f64, f64, f64)) -> Self {
        Self { t, x, y }
    }
}

/// A titled parametric curve.
///
/// Samples are kept in source order. Nothing sorts them or checks for
/// repeated parameter values, so `samples[0].t <= samples[n-1].t` only
/// holds if the file was written that way.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveRecord {
    /// Title from the second line of the file.
    pub title: String,
    /// Data rows in source order.
    pub samples: Vec<CurveSample>,
}

impl CurveRecord {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the curve has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// First sample, where renderers place the start marker.
    pub fn first(&self) -> Option<&CurveSample> {
        self.samples.first()
    }

    /// Last sample, where renderers place the end marker.
    pub fn last(&self) -> Option<&CurveSample> {
        self.samples.last()
    }

    /// Extent of the `(x, y)` points, or `None` for an empty curve.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.samples.iter().map(|s| (s.x, s.y)))
    }

    /// Smallest and largest parameter value, or `None` for an empty curve.
    pub fn t_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.samples.iter().map(|s| s.t);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
    }
}
