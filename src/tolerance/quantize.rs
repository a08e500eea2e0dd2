//! Quantized point keys.
//!
//! Floating-point coordinates make poor hash keys: two computations of the
//! same intersection rarely agree bit for bit. Snapping both coordinates to a
//! fixed decimal grid first gives a key whose equality and hash agree.
//!
//! # Example
//!
//! ```
//! use weiler_clip::tolerance::PointKey;
//! use weiler_clip::Point2;
//!
//! let a = PointKey::from_point(Point2::new(1.0000001_f64, 2.0), 5).unwrap();
//! let b = PointKey::from_point(Point2::new(0.9999999_f64, 2.0000002), 5).unwrap();
//! assert_eq!(a, b);
//! ```

use crate::primitives::Point2;
use num_traits::Float;

/// A point snapped to a decimal grid, usable as a hash map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey {
    x: i64,
    y: i64,
}

impl PointKey {
    /// Quantizes `point` to `precision` decimal places.
    ///
    /// Returns `None` if a coordinate is not finite or does not fit the grid.
    pub fn from_point<F: Float>(point: Point2<F>, precision: u32) -> Option<Self> {
        Self::with_scale(point, grid_scale(precision))
    }

    /// Quantizes `point` with a precomputed scale (`10^precision`).
    pub fn with_scale<F: Float>(point: Point2<F>, scale: F) -> Option<Self> {
        let x = (point.x * scale).round().to_i64()?;
        let y = (point.y * scale).round().to_i64()?;
        Some(Self { x, y })
    }

    /// Returns the snapped point for a given scale.
    pub fn to_point<F: Float>(self, scale: F) -> Option<Point2<F>> {
        let x = F::from(self.x)? / scale;
        let y = F::from(self.y)? / scale;
        Some(Point2::new(x, y))
    }
}

/// Returns `10^precision` in `F`.
///
/// Precisions beyond what `F` can hold give infinity, which no point can be
/// keyed against.
pub fn grid_scale<F: Float>(precision: u32) -> F {
    let ten = F::from(10.0).unwrap();
    ten.powi(i32::try_from(precision).unwrap_or(i32::MAX))
}
