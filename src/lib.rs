//! weiler-clip - General polygon clipping
//!
//! Clips one simple polygon against another with the Weiler-Atherton
//! algorithm. Either polygon may be concave, and the intersection may come
//! back as several disjoint polygons.
//!
//! # Example
//!
//! ```
//! use weiler_clip::{clip_polygons, Point2, Polygon};
//!
//! let u_shape = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(6.0, 0.0),
//!     Point2::new(6.0, 6.0),
//!     Point2::new(4.0, 6.0),
//!     Point2::new(4.0, 2.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 6.0),
//!     Point2::new(0.0, 6.0),
//! ]);
//! let bar = Polygon::new(vec![
//!     Point2::new(-1.0, 3.0),
//!     Point2::new(7.0, 3.0),
//!     Point2::new(7.0, 5.0),
//!     Point2::new(-1.0, 5.0),
//! ]);
//!
//! // Both arms of the U survive.
//! assert_eq!(clip_polygons(&u_shape, &bar).len(), 2);
//! ```

pub mod clip;
pub mod error;
pub mod io;
pub mod polygon;
pub mod primitives;
pub mod tolerance;

pub use clip::{clip_polygons, clip_polygons_with, try_clip_polygons, ClipOptions};
pub use error::{ClipError, PolygonRole};
pub use polygon::Polygon;
pub use primitives::{Point2, Segment2, Vec2};
