//! Polygon type and the measurements clipping relies on.
//!
//! This module provides:
//! - Signed and absolute area
//! - Centroid
//! - Point containment testing (ray casting)
//! - Winding normalization
//!
//! # Example
//!
//! ```
//! use weiler_clip::polygon::Polygon;
//! use weiler_clip::Point2;
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//!
//! assert_eq!(square.area(), 4.0);
//! assert!(square.contains(Point2::new(1.0, 1.0)));
//! ```

mod core;

pub(crate) use self::core::boxes_disjoint;
pub use self::core::{polygon_area, polygon_centroid, polygon_contains, polygon_signed_area, Polygon};
