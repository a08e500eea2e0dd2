//! Boundary augmentation: splicing crossings into a vertex sequence.

use super::intersect::Crossing;
use crate::primitives::Point2;
use crate::tolerance::PointKey;
use num_traits::Float;
use std::cmp::Ordering;

/// A node of an augmented boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Vertex<F> {
    pub point: Point2<F>,
    /// Set for inserted intersection nodes; identifies the twin on the
    /// other boundary.
    pub key: Option<PointKey>,
}

impl<F: Float> Vertex<F> {
    #[inline]
    pub fn original(point: Point2<F>) -> Self {
        Self { point, key: None }
    }

    #[inline]
    pub fn intersection(point: Point2<F>, key: PointKey) -> Self {
        Self {
            point,
            key: Some(key),
        }
    }

    #[inline]
    pub fn is_intersection(&self) -> bool {
        self.key.is_some()
    }
}

/// Builds the augmented sequence of `vertices` with every crossing placed
/// after the start vertex of the edge `edge_of` assigns it to.
///
/// Crossings on the same edge are ordered by squared distance from the
/// edge's start vertex, which is their order of travel along the edge.
pub(crate) fn augment<F, E>(vertices: &[Point2<F>], crossings: &[Crossing<F>], edge_of: E) -> Vec<Vertex<F>>
where
    F: Float,
    E: Fn(&Crossing<F>) -> usize,
{
    let mut per_edge: Vec<Vec<(F, &Crossing<F>)>> = vec![Vec::new(); vertices.len()];

    for crossing in crossings {
        let edge = edge_of(crossing);
        let dist = crossing.point.distance_squared(vertices[edge]);
        per_edge[edge].push((dist, crossing));
    }

    let mut augmented = Vec::with_capacity(vertices.len() + crossings.len());

    for (&vertex, on_edge) in vertices.iter().zip(per_edge.iter_mut()) {
        augmented.push(Vertex::original(vertex));

        on_edge.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        augmented.extend(
            on_edge
                .iter()
                .map(|&(_, c)| Vertex::intersection(c.point, c.key)),
        );
    }

    augmented
}
