//! Geometric predicates with explicit tolerance.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Checks if a point lies on a line segment within tolerance.
///
/// Returns `true` if the point `p` is within distance `eps` of the segment.
///
/// # Arguments
///
/// * `p` - The point to test
/// * `segment` - The line segment
/// * `eps` - Distance tolerance
#[inline]
pub fn point_on_segment<F: Float>(p: Point2<F>, segment: Segment2<F>, eps: F) -> bool {
    segment.distance_squared_to_point(p) <= eps * eps
}

/// Returns `true` if the open parameter interval `(eps, 1 - eps)` contains `t`.
///
/// Intersections that land on (or within `eps` of) a segment endpoint are
/// rejected, so a vertex touching an edge never counts as a crossing.
#[inline]
pub fn strictly_interior<F: Float>(t: F, eps: F) -> bool {
    t > eps && t < F::one() - eps
}
