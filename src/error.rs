//! Error types for polygon clipping.

use std::fmt;
use thiserror::Error;

/// Which input of a clip operation an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolygonRole {
    /// The polygon being clipped.
    Subject,
    /// The polygon clipped against.
    Clip,
}

impl fmt::Display for PolygonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonRole::Subject => write!(f, "subject"),
            PolygonRole::Clip => write!(f, "clip"),
        }
    }
}

/// Errors that can occur while clipping one polygon against another.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipError {
    /// A polygon has fewer than three vertices.
    #[error("{role} polygon needs at least 3 vertices, got {count}")]
    InsufficientVertices {
        /// The offending input.
        role: PolygonRole,
        /// Number of vertices supplied.
        count: usize,
    },

    /// A polygon has a NaN or infinite coordinate.
    #[error("{role} polygon has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// The offending input.
        role: PolygonRole,
    },

    /// The requested key precision cannot be represented on an `i64` grid.
    #[error("key precision {precision} exceeds the maximum of {max} decimal places")]
    KeyPrecisionOutOfRange {
        /// Requested decimal places.
        precision: u32,
        /// Largest supported precision.
        max: u32,
    },

    /// A crossing lies too far from the origin to be keyed at the requested
    /// precision.
    #[error("intersection at ({x}, {y}) overflows the key grid at precision {precision}")]
    KeyOverflow {
        /// X coordinate of the crossing.
        x: f64,
        /// Y coordinate of the crossing.
        y: f64,
        /// Decimal places in use.
        precision: u32,
    },

    /// An intersection on one boundary has no twin on the other.
    ///
    /// This indicates a bug in intersection deduplication, not bad input.
    #[error("intersection at ({x}, {y}) has no twin on the other boundary")]
    UnmatchedCrossing {
        /// X coordinate of the unmatched intersection.
        x: f64,
        /// Y coordinate of the unmatched intersection.
        y: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ClipError::InsufficientVertices {
            role: PolygonRole::Clip,
            count: 2,
        };
        assert_eq!(err.to_string(), "clip polygon needs at least 3 vertices, got 2");

        let err = ClipError::NonFiniteCoordinate {
            role: PolygonRole::Subject,
        };
        assert_eq!(err.to_string(), "subject polygon has a non-finite coordinate");

        let err = ClipError::KeyPrecisionOutOfRange {
            precision: 40,
            max: 18,
        };
        assert_eq!(
            err.to_string(),
            "key precision 40 exceeds the maximum of 18 decimal places"
        );

        let err = ClipError::KeyOverflow {
            x: 40.0,
            y: 20.0,
            precision: 18,
        };
        assert_eq!(
            err.to_string(),
            "intersection at (40, 20) overflows the key grid at precision 18"
        );

        let err = ClipError::UnmatchedCrossing { x: 1.5, y: 2.0 };
        assert_eq!(
            err.to_string(),
            "intersection at (1.5, 2) has no twin on the other boundary"
        );
    }
}
