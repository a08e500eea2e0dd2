//! Epsilon-aware geometric predicates and point identity.
//!
//! All functions in this module take explicit tolerance parameters.
//! No hidden epsilons are used.

mod predicates;
mod quantize;
mod weld;

pub use predicates::{point_on_segment, strictly_interior};
pub use quantize::{grid_scale, PointKey};
pub use weld::dedup_ring;
