//! Edge-pair intersection search.

use super::ClipOptions;
use crate::error::ClipError;
use crate::primitives::{Point2, Segment2};
use crate::tolerance::{grid_scale, strictly_interior, PointKey};
use num_traits::Float;
use std::collections::HashSet;
use tracing::{trace, warn};

/// A proper crossing between one clip edge and one subject edge.
///
/// Edge `i` of a polygon runs from vertex `i` to vertex `i + 1` (wrapping).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Crossing<F> {
    /// The crossing point, exactly as computed on the clip edge.
    pub point: Point2<F>,
    /// Quantized identity shared by both boundary copies of this crossing.
    pub key: PointKey,
    /// Index of the clip edge the crossing lies on.
    pub clip_edge: usize,
    /// Index of the subject edge the crossing lies on.
    pub subject_edge: usize,
}

/// Finds every proper crossing between the edges of `subject` and `clip`.
///
/// Parallel, collinear and zero-length edge pairs contribute nothing, and
/// neither do hits within `parameter_epsilon` of an edge endpoint. Crossings
/// that quantize to the same key are reported once, by the first edge pair
/// (clip edges outer, subject edges inner) that produced them.
///
/// Points keep their computed coordinates so they stay on the clip boundary;
/// the key is used only for deduplication and twin lookup.
///
/// # Errors
///
/// [`ClipError::KeyOverflow`] if a crossing lies too far out to be keyed at
/// `key_precision`.
pub(crate) fn find_crossings<F: Float>(
    subject: &[Point2<F>],
    clip: &[Point2<F>],
    options: &ClipOptions<F>,
) -> Result<Vec<Crossing<F>>, ClipError> {
    let scale: F = grid_scale(options.key_precision);
    let eps = options.parameter_epsilon;

    let mut crossings = Vec::new();
    let mut seen: HashSet<PointKey> = HashSet::new();

    let m = clip.len();
    let n = subject.len();

    for i in 0..m {
        let clip_edge = Segment2::new(clip[i], clip[(i + 1) % m]);

        for j in 0..n {
            let subject_edge = Segment2::new(subject[j], subject[(j + 1) % n]);

            let Some((s, t)) = clip_edge.line_params(subject_edge, options.determinant_epsilon)
            else {
                continue;
            };

            if !strictly_interior(s, eps) || !strictly_interior(t, eps) {
                continue;
            }

            let point = clip_edge.point_at(s);
            let key = PointKey::with_scale(point, scale).ok_or_else(|| {
                warn!(clip_edge = i, subject_edge = j, "crossing cannot be keyed");
                ClipError::KeyOverflow {
                    x: point.x.to_f64().unwrap_or(f64::NAN),
                    y: point.y.to_f64().unwrap_or(f64::NAN),
                    precision: options.key_precision,
                }
            })?;

            if !seen.insert(key) {
                trace!(clip_edge = i, subject_edge = j, "duplicate crossing skipped");
                continue;
            }

            crossings.push(Crossing {
                point,
                key,
                clip_edge: i,
                subject_edge: j,
            });
        }
    }

    Ok(crossings)
}
