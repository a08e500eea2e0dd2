//! 2D vector type for edge directions and offsets.

use num_traits::Float;
use std::ops::Mul;

/// A 2D displacement, produced by subtracting two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Perpendicular dot product.
    ///
    /// Positive when `other` turns counter-clockwise from `self`, zero when
    /// the two are parallel. Twice the signed area of the triangle they span.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_sign_follows_turn_direction() {
        let east: Vec2<f64> = Vec2::new(1.0, 0.0);
        let north = Vec2::new(0.0, 1.0);
        assert_eq!(east.cross(north), 1.0);
        assert_eq!(north.cross(east), -1.0);
        assert_eq!(east.cross(east * 3.0), 0.0);
    }

    #[test]
    fn test_dot_and_magnitude() {
        let v: Vec2<f64> = Vec2::new(3.0, 4.0);
        assert_eq!(v.dot(Vec2::new(1.0, 2.0)), 11.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(Vec2::<f64>::default(), Vec2::new(0.0, 0.0));
    }
}
