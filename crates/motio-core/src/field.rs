//! 2D vector field records.

use crate::bounds::Bounds;

/// A vector anchored at a position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSample {
    /// Anchor x.
    pub px: f64,
    /// Anchor y.
    pub py: f64,
    /// Vector x component.
    pub vx: f64,
    /// Vector y component.
    pub vy: f64,
}

impl FieldSample {
    /// Build a sample from position and vector components.
    pub fn new(px: f64, py: f64, vx: f64, vy: f64) -> Self {
        Self { px, py, vx, vy }
    }

    /// Euclidean length of the vector.
    pub fn magnitude(&self) -> f64 {
        self.vx.hypot(self.vy)
    }

    /// Direction of the vector in radians, measured from the +x axis.
    pub fn angle(&self) -> f64 {
        self.vy.atan2(self.vx)
    }
}

/// A titled set of field samples.
///
/// Samples are unordered spatial data; source order is kept as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldRecord {
    /// Title from the second line of the file.
    pub title: String,
    /// Field samples in source order.
    pub samples: Vec<FieldSample>,
}

impl FieldRecord {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the field has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Extent of the anchor positions, or `None` for an empty field.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.samples.iter().map(|s| (s.px, s.py)))
    }

    /// Largest vector magnitude, or `None` for an empty field.
    pub fn max_magnitude(&self) -> Option<f64> {
        self.samples.iter().map(FieldSample::magnitude).reduce(f64::max)
    }

    /// Smallest magnitude among non-zero vectors.
    ///
    /// Zero vectors carry no direction and would pin a color scale at 0.
    pub fn min_nonzero_magnitude(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(FieldSample::magnitude)
            .filter(|&m| m > 0.0)
            .reduce(f64::min)
    }
}
