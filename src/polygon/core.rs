//! Core polygon types and basic operations.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A simple polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the first).
/// Either winding is accepted; clipping normalizes internally.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns true if the vertices wind counter-clockwise.
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > F::zero()
    }

    /// Returns the centroid (center of mass) of the polygon.
    pub fn centroid(&self) -> Option<Point2<F>> {
        polygon_centroid(&self.vertices)
    }

    /// Tests if a point is inside the polygon.
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Returns the bounding box as (min, max) points.
    pub fn bounding_box(&self) -> Option<(Point2<F>, Point2<F>)> {
        let (first, rest) = self.vertices.split_first()?;

        let mut min = *first;
        let mut max = *first;

        for v in rest {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }

        Some((min, max))
    }

    /// Ensures the polygon has CCW winding order.
    pub fn ensure_ccw(&mut self) {
        if self.signed_area() < F::zero() {
            self.vertices.reverse();
        }
    }

    /// Returns a polygon with reversed winding order.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// Iterates over the edges, including the closing edge from the last
    /// vertex back to the first. Edge `i` starts at vertex `i`.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns true if the point lies within `eps` of any edge.
    pub fn boundary_contains(&self, point: Point2<F>, eps: F) -> bool {
        self.edges()
            .any(|edge| crate::tolerance::point_on_segment(point, edge, eps))
    }

    /// Clips this polygon against `clip`, returning the overlap regions.
    ///
    /// Shorthand for [`clip_polygons`](crate::clip::clip_polygons).
    pub fn clip(&self, clip: &Polygon<F>) -> Vec<Polygon<F>> {
        crate::clip::clip_polygons(self, clip)
    }
}

/// Returns true if two bounding boxes do not touch at all.
pub(crate) fn boxes_disjoint<F: Float>(
    (min_a, max_a): (Point2<F>, Point2<F>),
    (min_b, max_b): (Point2<F>, Point2<F>),
) -> bool {
    max_a.x < min_b.x || max_b.x < min_a.x || max_a.y < min_b.y || max_b.y < min_a.y
}

/// Consecutive vertex pairs, closing back to the first vertex.
fn vertex_pairs<F: Float>(
    vertices: &[Point2<F>],
) -> impl Iterator<Item = (Point2<F>, Point2<F>)> + '_ {
    vertices
        .iter()
        .copied()
        .zip(vertices.iter().copied().cycle().skip(1))
}

/// Signed area by the shoelace formula; positive for CCW winding.
///
/// Fewer than three vertices have zero area.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let twice = vertex_pairs(vertices).fold(F::zero(), |acc, (a, b)| acc + a.x * b.y - b.x * a.y);
    twice / F::from(2.0).unwrap()
}

/// Absolute area.
pub fn polygon_area<F: Float>(vertices: &[Point2<F>]) -> F {
    polygon_signed_area(vertices).abs()
}

/// Area centroid.
///
/// Returns None for degenerate polygons (fewer than 3 vertices or zero area).
pub fn polygon_centroid<F: Float>(vertices: &[Point2<F>]) -> Option<Point2<F>> {
    let area = polygon_signed_area(vertices);
    if area.abs() < F::epsilon() {
        return None;
    }

    let (cx, cy) = vertex_pairs(vertices).fold((F::zero(), F::zero()), |(cx, cy), (a, b)| {
        let w = a.x * b.y - b.x * a.y;
        (cx + (a.x + b.x) * w, cy + (a.y + b.y) * w)
    });

    let denom = F::from(6.0).unwrap() * area;
    Some(Point2::new(cx / denom, cy / denom))
}

/// Even-odd containment by casting a ray towards +x.
///
/// Points exactly on the boundary may go either way; see
/// [`Polygon::boundary_contains`] for a tolerant boundary test.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    vertex_pairs(vertices)
        .filter(|&(a, b)| {
            (a.y > point.y) != (b.y > point.y)
                && point.x < a.x + (b.x - a.x) * (point.y - a.y) / (b.y - a.y)
        })
        .count()
        % 2
        == 1
}
