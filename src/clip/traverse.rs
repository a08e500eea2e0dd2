//! Extraction of output polygons from the linked boundaries.

use super::link::{Linked, Side};
use crate::polygon::Polygon;
use crate::primitives::Point2;
use crate::tolerance::dedup_ring;
use num_traits::Float;
use tracing::{debug, trace, warn};

/// Consumption flags, one per node of each boundary.
struct Visited {
    subject: Vec<bool>,
    clip: Vec<bool>,
}

impl Visited {
    fn new<F>(linked: &Linked<F>) -> Self {
        Self {
            subject: vec![false; linked.subject.len()],
            clip: vec![false; linked.clip.len()],
        }
    }

    fn mark(&mut self, subject: usize, clip: usize) {
        self.subject[subject] = true;
        self.clip[clip] = true;
    }

    fn is_marked(&self, subject: usize, clip: usize) -> bool {
        self.subject[subject] || self.clip[clip]
    }
}

/// Walks the linked boundaries and returns one polygon per overlap region.
///
/// Every unvisited entering node starts a ring. The walk follows the current
/// boundary forward, hops to the twin at each intersection and stops when it
/// arrives back at the starting node. Rings are cleaned of consecutive
/// duplicates (compared at `scale`) and dropped if fewer than three vertices
/// remain.
pub(crate) fn traverse<F: Float>(linked: &Linked<F>, scale: F) -> Vec<Polygon<F>> {
    let starts: Vec<usize> = linked.entering().collect();
    if starts.is_empty() {
        warn!("intersections found but none enters the clip polygon; input is likely not simple");
        return Vec::new();
    }

    let mut visited = Visited::new(linked);
    let mut polygons = Vec::new();

    for start in starts {
        if visited.subject[start] {
            continue;
        }
        let Some(start_twin) = linked.twin(Side::Subject, start) else {
            continue;
        };
        visited.mark(start, start_twin);

        match trace_ring(linked, start, &mut visited) {
            Some(ring) => {
                let ring = dedup_ring(&ring, scale);
                if ring.len() >= 3 {
                    trace!(start, vertices = ring.len(), "ring closed");
                    polygons.push(Polygon::new(ring));
                } else {
                    debug!(start, "dropping degenerate ring");
                }
            }
            None => warn!(start, "traversal did not return to its entry point; ring abandoned"),
        }
    }

    polygons
}

/// Follows one ring from the entering subject node `start`.
///
/// Returns `None` if the walk runs into a node consumed by another ring or
/// takes more steps than there are nodes, either of which means the linked
/// structure is inconsistent.
fn trace_ring<F: Float>(
    linked: &Linked<F>,
    start: usize,
    visited: &mut Visited,
) -> Option<Vec<Point2<F>>> {
    let budget = linked.subject.len() + linked.clip.len();

    let mut ring = Vec::new();
    let mut side = Side::Subject;
    let mut index = start;

    for _ in 0..budget {
        let nodes = linked.nodes(side);
        index = (index + 1) % nodes.len();

        let vertex = nodes[index];
        ring.push(vertex.point);

        if !vertex.is_intersection() {
            continue;
        }

        let twin = linked.twin(side, index)?;
        let (subject_index, clip_index) = match side {
            Side::Subject => (index, twin),
            Side::Clip => (twin, index),
        };

        if subject_index == start {
            return Some(ring);
        }
        if visited.is_marked(subject_index, clip_index) {
            return None;
        }
        visited.mark(subject_index, clip_index);

        side = side.other();
        index = twin;
    }

    None
}
