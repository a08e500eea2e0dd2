//! Entry/exit classification and cross-linking of the two boundaries.

use super::augment::Vertex;
use crate::error::ClipError;
use crate::polygon::polygon_contains;
use crate::primitives::Point2;
use crate::tolerance::PointKey;
use num_traits::Float;
use std::collections::HashMap;

/// Direction of travel across the clip boundary at a subject intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Role {
    /// The subject boundary passes from outside to inside the clip polygon.
    Entering,
    /// The subject boundary passes from inside to outside the clip polygon.
    Leaving,
}

/// Which augmented boundary a node index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Subject,
    Clip,
}

impl Side {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::Subject => Side::Clip,
            Side::Clip => Side::Subject,
        }
    }
}

/// Both augmented boundaries plus the tables that tie them together.
///
/// The vertex arenas own their nodes; twins are plain indices into the
/// other arena, and every table is parallel to the arena it describes.
#[derive(Debug, Clone)]
pub(crate) struct Linked<F> {
    pub subject: Vec<Vertex<F>>,
    pub clip: Vec<Vertex<F>>,
    /// Parallel to `subject`; `Some` exactly on intersection nodes.
    pub roles: Vec<Option<Role>>,
    /// Parallel to `subject`; index of the twin in `clip`.
    pub subject_twin: Vec<Option<usize>>,
    /// Parallel to `clip`; index of the twin in `subject`.
    pub clip_twin: Vec<Option<usize>>,
}

impl<F: Float> Linked<F> {
    #[inline]
    pub fn nodes(&self, side: Side) -> &[Vertex<F>] {
        match side {
            Side::Subject => &self.subject,
            Side::Clip => &self.clip,
        }
    }

    #[inline]
    pub fn twin(&self, side: Side, index: usize) -> Option<usize> {
        match side {
            Side::Subject => self.subject_twin[index],
            Side::Clip => self.clip_twin[index],
        }
    }

    /// Subject indices of entering intersections, in boundary order.
    pub fn entering(&self) -> impl Iterator<Item = usize> + '_ {
        self.roles
            .iter()
            .enumerate()
            .filter(|(_, role)| **role == Some(Role::Entering))
            .map(|(i, _)| i)
    }
}

/// Labels every subject intersection node as entering or leaving `clip`.
///
/// Each original vertex resets the inside/outside state by a containment
/// test; every intersection after it flips the state.
pub(crate) fn classify<F: Float>(subject: &[Vertex<F>], clip: &[Point2<F>]) -> Vec<Option<Role>> {
    let mut inside = false;

    subject
        .iter()
        .map(|v| {
            if !v.is_intersection() {
                inside = polygon_contains(clip, v.point);
                return None;
            }
            let role = if inside { Role::Leaving } else { Role::Entering };
            inside = !inside;
            Some(role)
        })
        .collect()
}

/// Classifies the subject boundary and pairs each intersection node with
/// its twin on the clip boundary.
///
/// # Errors
///
/// [`ClipError::UnmatchedCrossing`] if an intersection node on either
/// boundary has no partner with the same key on the other.
pub(crate) fn link<F: Float>(
    subject: Vec<Vertex<F>>,
    clip: Vec<Vertex<F>>,
    clip_polygon: &[Point2<F>],
) -> Result<Linked<F>, ClipError> {
    let clip_index: HashMap<PointKey, usize> = clip
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.key.map(|key| (key, i)))
        .collect();

    let mut subject_twin = vec![None; subject.len()];
    let mut clip_twin = vec![None; clip.len()];

    for (i, v) in subject.iter().enumerate() {
        let Some(key) = v.key else {
            continue;
        };
        let j = *clip_index.get(&key).ok_or_else(|| unmatched(v.point))?;
        subject_twin[i] = Some(j);
        clip_twin[j] = Some(i);
    }

    if let Some(orphan) = clip
        .iter()
        .zip(&clip_twin)
        .find(|(v, twin)| v.is_intersection() && twin.is_none())
    {
        return Err(unmatched(orphan.0.point));
    }

    let roles = classify(&subject, clip_polygon);

    Ok(Linked {
        subject,
        clip,
        roles,
        subject_twin,
        clip_twin,
    })
}

fn unmatched<F: Float>(point: Point2<F>) -> ClipError {
    ClipError::UnmatchedCrossing {
        x: point.x.to_f64().unwrap_or(f64::NAN),
        y: point.y.to_f64().unwrap_or(f64::NAN),
    }
}
