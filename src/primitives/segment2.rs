//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(self.end)
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// - `t = 0` returns `start`
    /// - `t = 1` returns `end`
    /// - Values outside [0, 1] extrapolate beyond the segment
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Solves for the parameters where the supporting lines of `self` and
    /// `other` meet.
    ///
    /// Returns `(s, t)` such that `self.point_at(s) == other.point_at(t)`, or
    /// `None` when `|det| < det_eps` (parallel, collinear, or zero-length
    /// segments). The parameters are not clamped; callers decide which range
    /// counts as a hit.
    pub fn line_params(self, other: Self, det_eps: F) -> Option<(F, F)> {
        let r = self.direction();
        let u = other.direction();
        let det = r.cross(u);

        if det.abs() < det_eps {
            return None;
        }

        let w = other.start - self.start;
        let s = w.cross(u) / det;
        let t = w.cross(r) / det;

        Some((s, t))
    }

    /// Computes the closest point on the segment to the given point.
    ///
    /// Returns a tuple of (closest_point, parameter_t) where t is in [0, 1].
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.direction();
        let len_sq = v.magnitude_squared();

        // Degenerate segment (start == end)
        if len_sq <= F::epsilon() {
            return (self.start, F::zero());
        }

        let t = (p - self.start).dot(v) / len_sq;
        let t_clamped = t.max(F::zero()).min(F::one());

        (self.point_at(t_clamped), t_clamped)
    }

    /// Computes the squared distance from a point to this segment.
    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance_squared(closest)
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment2<f64> {
        Segment2::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    #[test]
    fn test_direction_and_length() {
        let s = seg(1.0, 1.0, 4.0, 5.0);
        let d = s.direction();
        assert_eq!(d.x, 3.0);
        assert_eq!(d.y, 4.0);
        assert_eq!(s.length_squared(), 25.0);
    }

    #[test]
    fn test_point_at() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        assert_eq!(s.point_at(0.0).x, 0.0);
        assert_eq!(s.point_at(1.0).x, 10.0);
        assert_eq!(s.point_at(0.5).x, 5.0);
    }

    #[test]
    fn test_line_params_crossing() {
        let a = seg(0.0, 0.0, 4.0, 4.0);
        let b = seg(0.0, 4.0, 4.0, 0.0);
        let (s, t) = a.line_params(b, 1e-9).unwrap();
        assert_relative_eq!(s, 0.5, epsilon = 1e-12);
        assert_relative_eq!(t, 0.5, epsilon = 1e-12);

        let p = a.point_at(s);
        let q = b.point_at(t);
        assert_relative_eq!(p.x, q.x, epsilon = 1e-12);
        assert_relative_eq!(p.y, q.y, epsilon = 1e-12);
    }

    #[test]
    fn test_line_params_asymmetric() {
        // Vertical subject edge crossing a long horizontal clip edge.
        let clip = seg(2.0, 2.0, 6.0, 2.0);
        let subject = seg(4.0, 0.0, 4.0, 4.0);
        let (s, t) = clip.line_params(subject, 1e-9).unwrap();
        assert_relative_eq!(s, 0.5, epsilon = 1e-12);
        assert_relative_eq!(t, 0.5, epsilon = 1e-12);

        let subject = seg(5.0, 1.0, 5.0, 5.0);
        let (s, t) = clip.line_params(subject, 1e-9).unwrap();
        assert_relative_eq!(s, 0.75, epsilon = 1e-12);
        assert_relative_eq!(t, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_line_params_out_of_range_is_reported() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(5.0, -1.0, 5.0, 1.0);
        let (s, t) = a.line_params(b, 1e-9).unwrap();
        assert_relative_eq!(s, 5.0, epsilon = 1e-12);
        assert_relative_eq!(t, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_line_params_parallel() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(0.0, 1.0, 1.0, 1.0);
        assert!(a.line_params(b, 1e-9).is_none());

        // Collinear
        let c = seg(0.5, 0.0, 2.0, 0.0);
        assert!(a.line_params(c, 1e-9).is_none());

        // Zero-length
        let d = seg(0.5, -1.0, 0.5, -1.0);
        assert!(a.line_params(d, 1e-9).is_none());
    }

    #[test]
    fn test_closest_point_on_segment() {
        let s = seg(0.0, 0.0, 10.0, 0.0);

        let (closest, t) = s.closest_point(Point2::new(5.0, 5.0));
        assert_relative_eq!(closest.x, 5.0, epsilon = 1e-10);
        assert_relative_eq!(closest.y, 0.0, epsilon = 1e-10);
        assert_relative_eq!(t, 0.5, epsilon = 1e-10);

        let (closest, t) = s.closest_point(Point2::new(-5.0, 0.0));
        assert_relative_eq!(closest.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(t, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_distance_squared_to_point() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        assert_relative_eq!(
            s.distance_squared_to_point(Point2::new(5.0, 3.0)),
            9.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_degenerate_closest_point() {
        let s = seg(5.0, 5.0, 5.0, 5.0);
        let (closest, t) = s.closest_point(Point2::new(0.0, 0.0));
        assert_eq!(closest.x, 5.0);
        assert_eq!(closest.y, 5.0);
        assert_eq!(t, 0.0);
    }
}
