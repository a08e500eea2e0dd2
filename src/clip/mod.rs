//! Weiler-Atherton clipping of one simple polygon against another.
//!
//! Unlike Sutherland-Hodgman, neither polygon has to be convex, and the
//! result may consist of several disjoint polygons. The clip runs in four
//! stages:
//!
//! 1. find every proper crossing between a subject edge and a clip edge,
//! 2. splice the crossings into both vertex sequences in travel order,
//! 3. label subject crossings as entering or leaving the clip polygon and
//!    pair each crossing with its twin on the other boundary,
//! 4. walk from each unvisited entering crossing, switching boundary at every
//!    crossing, until the walk returns to where it started.
//!
//! # Example
//!
//! ```
//! use weiler_clip::clip::clip_polygons;
//! use weiler_clip::polygon::Polygon;
//! use weiler_clip::Point2;
//!
//! let subject = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ]);
//! let clip = Polygon::new(vec![
//!     Point2::new(2.0, 2.0),
//!     Point2::new(6.0, 2.0),
//!     Point2::new(6.0, 6.0),
//!     Point2::new(2.0, 6.0),
//! ]);
//!
//! let result = clip_polygons(&subject, &clip);
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].area(), 4.0);
//! ```

mod augment;
mod intersect;
mod link;
mod traverse;

use crate::error::{ClipError, PolygonRole};
use crate::polygon::{boxes_disjoint, Polygon};
use crate::primitives::Point2;
use crate::tolerance::grid_scale;
use num_traits::Float;
use tracing::{debug, debug_span, error, warn};

/// Default half-width of the excluded band at each end of an edge, in edge
/// parameter units.
pub const DEFAULT_PARAMETER_EPSILON: f64 = 1e-6;

/// Default threshold below which two edges are treated as parallel.
pub const DEFAULT_DETERMINANT_EPSILON: f64 = 1e-6;

/// Default number of decimal places intersection points are keyed at.
pub const DEFAULT_KEY_PRECISION: u32 = 5;

/// Largest key precision accepted; `10^18` is the largest power of ten an
/// `i64` holds.
pub const MAX_KEY_PRECISION: u32 = 18;

/// Tolerances used by a clip operation.
///
/// The right values depend on geometry scale. `parameter_epsilon` is relative
/// to each edge, but `determinant_epsilon` is an absolute bound on the cross
/// product of two edge vectors, so it scales with the product of their
/// lengths. The defaults suit coordinates up to about 1e6 with edges longer
/// than about 1e-2. For smaller edges, shrink `determinant_epsilon` with the
/// square of the edge length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipOptions<F> {
    /// Intersections with an edge parameter outside
    /// `(parameter_epsilon, 1 - parameter_epsilon)` are ignored, so a vertex
    /// touching an edge is never a crossing.
    pub parameter_epsilon: F,
    /// Edge pairs whose direction cross product is smaller than this in
    /// magnitude are parallel and never cross.
    pub determinant_epsilon: F,
    /// Decimal places intersection points are quantized to before they are
    /// compared. At most [`MAX_KEY_PRECISION`], and coordinates times
    /// `10^key_precision` must fit an `i64`.
    pub key_precision: u32,
}

impl<F: Float> Default for ClipOptions<F> {
    fn default() -> Self {
        Self {
            parameter_epsilon: F::from(DEFAULT_PARAMETER_EPSILON).unwrap(),
            determinant_epsilon: F::from(DEFAULT_DETERMINANT_EPSILON).unwrap(),
            key_precision: DEFAULT_KEY_PRECISION,
        }
    }
}

impl<F: Float> ClipOptions<F> {
    /// Creates options with the default tolerances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoint exclusion band.
    pub fn with_parameter_epsilon(mut self, eps: F) -> Self {
        self.parameter_epsilon = eps;
        self
    }

    /// Sets the parallel-edge threshold.
    pub fn with_determinant_epsilon(mut self, eps: F) -> Self {
        self.determinant_epsilon = eps;
        self
    }

    /// Sets the key precision in decimal places.
    pub fn with_key_precision(mut self, precision: u32) -> Self {
        self.key_precision = precision;
        self
    }

    /// Distance under which a point counts as lying on a boundary: one step
    /// of the key grid.
    pub fn boundary_epsilon(&self) -> F {
        F::one() / grid_scale::<F>(self.key_precision)
    }
}

/// Clips `subject` against `clip` with the default tolerances.
///
/// Returns the regions covered by both polygons, one polygon per connected
/// region, wound counter-clockwise. When the boundaries never cross and one
/// polygon lies inside the other, the inner polygon is returned unchanged.
///
/// Inputs with fewer than three vertices or non-finite coordinates yield an
/// empty result; use [`try_clip_polygons`] to tell those apart.
///
/// # Example
///
/// ```
/// use weiler_clip::clip::clip_polygons;
/// use weiler_clip::polygon::Polygon;
/// use weiler_clip::Point2;
///
/// let subject = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ]);
/// let far_away = Polygon::new(vec![
///     Point2::new(10.0, 10.0),
///     Point2::new(14.0, 10.0),
///     Point2::new(14.0, 14.0),
///     Point2::new(10.0, 14.0),
/// ]);
///
/// assert!(clip_polygons(&subject, &far_away).is_empty());
/// ```
pub fn clip_polygons<F: Float>(subject: &Polygon<F>, clip: &Polygon<F>) -> Vec<Polygon<F>> {
    clip_polygons_with(subject, clip, &ClipOptions::default())
}

/// Clips `subject` against `clip` with explicit tolerances.
///
/// See [`clip_polygons`].
///
/// # Panics
///
/// In debug builds, panics if the intersection bookkeeping is internally
/// inconsistent. Release builds log the error and return an empty result.
pub fn clip_polygons_with<F: Float>(
    subject: &Polygon<F>,
    clip: &Polygon<F>,
    options: &ClipOptions<F>,
) -> Vec<Polygon<F>> {
    match try_clip_polygons(subject, clip, options) {
        Ok(polygons) => polygons,
        Err(err @ ClipError::UnmatchedCrossing { .. }) => {
            if cfg!(debug_assertions) {
                panic!("weiler-atherton invariant violated: {err}");
            }
            error!(%err, "clip aborted");
            Vec::new()
        }
        Err(err @ (ClipError::KeyPrecisionOutOfRange { .. } | ClipError::KeyOverflow { .. })) => {
            warn!(%err, "clip options do not fit the input");
            Vec::new()
        }
        Err(err) => {
            debug!(%err, "clip input rejected");
            Vec::new()
        }
    }
}

/// Clips `subject` against `clip`, reporting invalid input as an error.
///
/// # Errors
///
/// - [`ClipError::InsufficientVertices`] if either polygon has fewer than
///   three vertices.
/// - [`ClipError::NonFiniteCoordinate`] if either polygon has a NaN or
///   infinite coordinate.
/// - [`ClipError::KeyPrecisionOutOfRange`] if `options.key_precision`
///   exceeds [`MAX_KEY_PRECISION`].
/// - [`ClipError::KeyOverflow`] if a crossing is too far out to be keyed at
///   `options.key_precision`.
/// - [`ClipError::UnmatchedCrossing`] if an intersection could not be paired
///   across the two boundaries (an internal bug, not bad input).
///
/// # Example
///
/// ```
/// use weiler_clip::clip::{try_clip_polygons, ClipOptions};
/// use weiler_clip::polygon::Polygon;
/// use weiler_clip::{ClipError, Point2};
///
/// let square = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ]);
/// let segment = Polygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
///
/// let err = try_clip_polygons(&square, &segment, &ClipOptions::default()).unwrap_err();
/// assert!(matches!(err, ClipError::InsufficientVertices { count: 2, .. }));
/// ```
pub fn try_clip_polygons<F: Float>(
    subject: &Polygon<F>,
    clip: &Polygon<F>,
    options: &ClipOptions<F>,
) -> Result<Vec<Polygon<F>>, ClipError> {
    let _span = debug_span!("clip_polygons", subject = subject.len(), clip = clip.len()).entered();

    validate(subject, PolygonRole::Subject)?;
    validate(clip, PolygonRole::Clip)?;
    if options.key_precision > MAX_KEY_PRECISION {
        return Err(ClipError::KeyPrecisionOutOfRange {
            precision: options.key_precision,
            max: MAX_KEY_PRECISION,
        });
    }

    if let (Some(a), Some(b)) = (subject.bounding_box(), clip.bounding_box()) {
        if boxes_disjoint(a, b) {
            debug!("bounding boxes disjoint");
            return Ok(Vec::new());
        }
    }

    // Walking both boundaries forward only traces overlap regions when they
    // wind the same way.
    let mut subject_ccw = subject.clone();
    subject_ccw.ensure_ccw();
    let mut clip_ccw = clip.clone();
    clip_ccw.ensure_ccw();

    let crossings =
        intersect::find_crossings(&subject_ccw.vertices, &clip_ccw.vertices, options)?;
    debug!(crossings = crossings.len(), "intersection search done");

    if crossings.is_empty() {
        return Ok(containment_fallback(subject, clip, options));
    }

    let subject_nodes = augment::augment(&subject_ccw.vertices, &crossings, |c| c.subject_edge);
    let clip_nodes = augment::augment(&clip_ccw.vertices, &crossings, |c| c.clip_edge);

    let linked = link::link(subject_nodes, clip_nodes, &clip_ccw.vertices)?;
    let polygons = traverse::traverse(&linked, grid_scale(options.key_precision));

    debug!(polygons = polygons.len(), "traversal done");
    Ok(polygons)
}

fn validate<F: Float>(polygon: &Polygon<F>, role: PolygonRole) -> Result<(), ClipError> {
    if polygon.len() < 3 {
        return Err(ClipError::InsufficientVertices {
            role,
            count: polygon.len(),
        });
    }
    if !polygon.vertices.iter().all(|p| p.is_finite()) {
        return Err(ClipError::NonFiniteCoordinate { role });
    }
    Ok(())
}

/// Resolves a clip whose boundaries never cross: one polygon contains the
/// other, or they do not overlap.
fn containment_fallback<F: Float>(
    subject: &Polygon<F>,
    clip: &Polygon<F>,
    options: &ClipOptions<F>,
) -> Vec<Polygon<F>> {
    let eps = options.boundary_epsilon();

    if clip.contains(probe_point(subject, clip, eps)) {
        debug!("subject lies inside clip");
        return vec![subject.clone()];
    }
    if subject.contains(probe_point(clip, subject, eps)) {
        debug!("clip lies inside subject");
        return vec![clip.clone()];
    }

    debug!("polygons do not overlap");
    Vec::new()
}

/// Picks a point of `polygon` to test against `other`.
///
/// Ray casting is unreliable on the boundary, so vertices lying on `other`'s
/// edges are skipped. A polygon whose every vertex sits on `other`'s boundary
/// is probed at its centroid.
fn probe_point<F: Float>(polygon: &Polygon<F>, other: &Polygon<F>, eps: F) -> Point2<F> {
    polygon
        .vertices
        .iter()
        .copied()
        .find(|&v| !other.boundary_contains(v, eps))
        .or_else(|| polygon.centroid())
        .unwrap_or(polygon.vertices[0])
}
