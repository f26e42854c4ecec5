//! Two-dimensional vectors

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// An immutable (x, y) pair, used both for points and for directions
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `degrees` (0° = +x, 90° = +y)
    pub fn from_angle(degrees: f64) -> Self {
        let radians = degrees.to_radians();
        Self::new(radians.cos(), radians.sin())
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3D cross product
    pub fn cross(self, other: Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Same direction with length 1, or `None` for the zero vector
    pub fn unit(self) -> Option<Vector> {
        let magnitude = self.magnitude();
        if magnitude <= f64::EPSILON || !magnitude.is_finite() {
            None
        } else {
            Some(self.scale(1.0 / magnitude))
        }
    }

    /// Rotated a quarter turn (from +x towards +y)
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Express this point relative to `origin`
    pub fn to_space(self, origin: Vector) -> Vector {
        self - origin
    }

    /// Absolute angle of this vector in degrees, normalized into [0, 360)
    ///
    /// A vertical vector (x = 0) maps straight to 90° or 270° without going
    /// through the arctangent. The zero vector has angle 0.
    pub fn angle(self) -> f64 {
        if self.x == 0.0 {
            return if self.y > 0.0 {
                90.0
            } else if self.y < 0.0 {
                270.0
            } else {
                0.0
            };
        }
        normalize_degrees(self.y.atan2(self.x).to_degrees())
    }

    /// Angle of this point as seen from `origin`, in [0, 360)
    pub fn angle_around(self, origin: Vector) -> f64 {
        self.to_space(origin).angle()
    }

    pub fn distance(self, other: Vector) -> f64 {
        (self - other).magnitude()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Wrap an angle in degrees into [0, 360)
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, factor: f64) -> Vector {
        self.scale(factor)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(3.0, -1.0);
        assert_eq!(a + b, Vector::new(4.0, 1.0));
        assert_eq!(a - b, Vector::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vector::new(2.0, 4.0));
        assert_eq!(-a, Vector::new(-1.0, -2.0));
        assert_eq!(a.dot(b), 1.0);
    }

    #[test]
    fn test_magnitude_and_distance() {
        assert!(approx_eq(Vector::new(3.0, 4.0).magnitude(), 5.0));
        assert!(approx_eq(
            Vector::new(1.0, 1.0).distance(Vector::new(4.0, 5.0)),
            5.0
        ));
    }

    #[test]
    fn test_unit_of_zero_is_none() {
        assert!(Vector::ZERO.unit().is_none());
        let unit = Vector::new(0.0, -7.0).unit().unwrap();
        assert!(approx_eq(unit.y, -1.0));
    }

    #[test]
    fn test_angle_quadrants() {
        assert!(approx_eq(Vector::new(1.0, 0.0).angle(), 0.0));
        assert!(approx_eq(Vector::new(1.0, 1.0).angle(), 45.0));
        assert!(approx_eq(Vector::new(-1.0, 1.0).angle(), 135.0));
        assert!(approx_eq(Vector::new(-1.0, -1.0).angle(), 225.0));
        assert!(approx_eq(Vector::new(1.0, -1.0).angle(), 315.0));
    }

    #[test]
    fn test_angle_vertical_vectors() {
        assert_eq!(Vector::new(0.0, 5.0).angle(), 90.0);
        assert_eq!(Vector::new(0.0, -5.0).angle(), 270.0);
        assert_eq!(Vector::ZERO.angle(), 0.0);
    }

    #[test]
    fn test_angle_around_translates_first() {
        let hub = Vector::new(100.0, 100.0);
        assert!(approx_eq(Vector::new(100.0, 50.0).angle_around(hub), 270.0));
        assert!(approx_eq(Vector::new(50.0, 100.0).angle_around(hub), 180.0));
    }

    #[test]
    fn test_angle_never_reaches_360() {
        let angle = Vector::new(1.0, -1e-18).angle();
        assert!((0.0..360.0).contains(&angle), "angle {} out of range", angle);
    }

    #[test]
    fn test_from_angle_round_trip() {
        for degrees in [0.0, 30.0, 90.0, 181.5, 270.0, 359.0] {
            let angle = Vector::from_angle(degrees).angle();
            assert!(
                (angle - degrees).abs() < 1e-9,
                "expected {}, got {}",
                degrees,
                angle
            );
        }
    }

    #[test]
    fn test_normalize_degrees() {
        assert!(approx_eq(normalize_degrees(370.0), 10.0));
        assert!(approx_eq(normalize_degrees(-30.0), 330.0));
        assert_eq!(normalize_degrees(360.0), 0.0);
    }
}
