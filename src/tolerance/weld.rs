//! Duplicate vertex removal on closed rings.

use super::PointKey;
use crate::primitives::Point2;
use num_traits::Float;

/// Removes consecutive duplicate vertices from a closed ring.
///
/// Two vertices are duplicates when they quantize to the same [`PointKey`]
/// at `scale`. The wrap-around pair (last, first) is checked too, so the
/// result never repeats its first vertex at the end. The first vertex of
/// each run is kept.
///
/// # Example
///
/// ```
/// use weiler_clip::tolerance::{dedup_ring, grid_scale};
/// use weiler_clip::Point2;
///
/// let ring = vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 0.0),
/// ];
///
/// let cleaned = dedup_ring(&ring, grid_scale(5));
/// assert_eq!(cleaned.len(), 3);
/// ```
pub fn dedup_ring<F: Float>(points: &[Point2<F>], scale: F) -> Vec<Point2<F>> {
    let mut result: Vec<Point2<F>> = Vec::with_capacity(points.len());
    let mut last_key: Option<PointKey> = None;

    for &p in points {
        let key = PointKey::with_scale(p, scale);
        if key.is_some() && key == last_key {
            continue;
        }
        result.push(p);
        last_key = key;
    }

    while result.len() > 1 {
        let first = PointKey::with_scale(result[0], scale);
        let last = PointKey::with_scale(result[result.len() - 1], scale);
        if first.is_some() && first == last {
            result.pop();
        } else {
            break;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tolerance::grid_scale;

    #[test]
    fn test_no_duplicates_unchanged() {
        let ring = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ];
        assert_eq!(dedup_ring(&ring, grid_scale(5)), ring);
    }

    #[test]
    fn test_runs_collapse_to_first() {
        let ring = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.000_000_1, 0.0),
            Point2::new(2.0, 0.000_000_2),
            Point2::new(2.0, 2.0),
        ];
        let cleaned = dedup_ring(&ring, grid_scale(5));
        assert_eq!(cleaned.len(), 3);
        assert_eq!(cleaned[1], Point2::new(2.0, 0.0));
    }

    #[test]
    fn test_wrap_around_duplicate_removed() {
        let ring = vec![
            Point2::new(4.0_f64, 4.0),
            Point2::new(2.0, 4.0),
            Point2::new(2.0, 2.0),
            Point2::new(4.0, 2.0),
            Point2::new(4.0, 4.0),
            Point2::new(4.0, 4.0),
        ];
        let cleaned = dedup_ring(&ring, grid_scale(5));
        assert_eq!(cleaned.len(), 4);
        assert_eq!(cleaned[0], Point2::new(4.0, 4.0));
        assert_eq!(cleaned[3], Point2::new(4.0, 2.0));
    }

    #[test]
    fn test_non_consecutive_repeats_kept() {
        // A ring may legitimately revisit a location.
        let ring = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        assert_eq!(dedup_ring(&ring, grid_scale(5)).len(), 4);
    }

    #[test]
    fn test_all_same_collapses_to_one() {
        let ring = vec![Point2::new(3.0_f64, 3.0); 4];
        assert_eq!(dedup_ring(&ring, grid_scale(5)), vec![Point2::new(3.0, 3.0)]);
    }

    #[test]
    fn test_empty() {
        let ring: Vec<Point2<f64>> = Vec::new();
        assert!(dedup_ring(&ring, grid_scale(5)).is_empty());
    }
}
