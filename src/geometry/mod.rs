//! Planar geometry primitives shared by every weaving stage
//!
//! Coordinates follow the canvas convention: x grows to the right, y grows
//! downwards, and angles are measured in degrees from +x towards +y.

pub mod line;
pub mod vector;

pub use line::{percent_of, Line};
pub use vector::Vector;

/// Absolute tolerance for "is this point on the line" style predicates
pub const ROUNDING_TOLERANCE: f64 = 1e-5;
