//! Line segments and the intersection math built on them

use serde::Serialize;

use super::vector::Vector;
use super::ROUNDING_TOLERANCE;

/// Relative size under which the intersection determinant counts as zero
const PARALLEL_TOLERANCE: f64 = 1e-12;

/// A segment from `start` to `end`
///
/// The length is computed once on construction. Fields are private so the
/// cached length can never drift away from the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    start: Vector,
    end: Vector,
    length: f64,
}

impl Line {
    pub fn new(start: Vector, end: Vector) -> Self {
        Self {
            start,
            end,
            length: start.distance(end),
        }
    }

    pub fn start(&self) -> Vector {
        self.start
    }

    pub fn end(&self) -> Vector {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Vector from `start` to `end`
    pub fn direction(&self) -> Vector {
        self.end - self.start
    }

    /// True when both endpoints coincide
    pub fn is_degenerate(&self) -> bool {
        self.length <= f64::EPSILON
    }

    /// Intersection of the two infinite lines through `self` and `other`
    ///
    /// Uses the standard form `a·x + b·y = c` of both lines. Returns `None`
    /// when the determinant vanishes (parallel or coincident lines) or is too
    /// small relative to its terms to give a finite answer.
    pub fn intersect(&self, other: &Line) -> Option<Vector> {
        let (a1, b1, c1) = self.standard_form();
        let (a2, b2, c2) = other.standard_form();

        let det = a1 * b2 - a2 * b1;
        let scale = (a1 * b2).abs() + (a2 * b1).abs();
        if det == 0.0 || det.abs() <= scale * PARALLEL_TOLERANCE {
            return None;
        }

        let point = Vector::new((b2 * c1 - b1 * c2) / det, (a1 * c2 - a2 * c1) / det);
        point.is_finite().then_some(point)
    }

    fn standard_form(&self) -> (f64, f64, f64) {
        let a = self.end.y - self.start.y;
        let b = self.start.x - self.end.x;
        let c = a * self.start.x + b * self.start.y;
        (a, b, c)
    }

    /// Affine point: 0 is `start`, 1 is `end`
    pub fn point_at(&self, t: f64) -> Vector {
        self.start + self.direction() * t
    }

    /// Point at absolute distance `distance` from `start`, towards `end`
    pub fn point_at_abs(&self, distance: f64) -> Vector {
        if self.is_degenerate() {
            return self.start;
        }
        self.point_at(distance / self.length)
    }

    /// Whether `point` lies on the segment, endpoints included
    ///
    /// Distance-sum test: the two distances to the endpoints add up to the
    /// length, give or take rounding.
    pub fn contains(&self, point: Vector) -> bool {
        let sum = self.start.distance(point) + point.distance(self.end);
        (sum - self.length).abs() <= ROUNDING_TOLERANCE
    }

    /// Whether `point` lies on the infinite line through this segment
    ///
    /// The tolerance grows with the point's distance from `start`, measured
    /// in segment lengths, so far-away intersections still qualify.
    pub fn contains_extended(&self, point: Vector) -> bool {
        let offset = point - self.start;
        if self.is_degenerate() {
            return offset.magnitude() <= ROUNDING_TOLERANCE;
        }
        let perpendicular = self.direction().cross(offset).abs() / self.length;
        let reach = (offset.magnitude() / self.length).max(1.0);
        perpendicular <= ROUNDING_TOLERANCE * reach
    }

    /// Inverse of [`Line::point_at`] for points on the segment
    pub fn line_value_at(&self, point: Vector) -> Option<f64> {
        if !self.contains(point) {
            return None;
        }
        if self.is_degenerate() {
            return Some(0.0);
        }
        Some(self.start.distance(point) / self.length)
    }

    /// Parameter of the orthogonal projection of `point` onto the infinite line
    pub fn project(&self, point: Vector) -> f64 {
        let direction = self.direction();
        let squared = direction.dot(direction);
        if squared <= f64::EPSILON {
            return 0.0;
        }
        (point - self.start).dot(direction) / squared
    }

    /// A new line running the other way
    pub fn reverse(&self) -> Line {
        Line::new(self.end, self.start)
    }
}

/// Position of `point` along `axis` as a fraction in [0, 1]
///
/// The point is carried onto the axis along a line parallel to `anchor`, then
/// measured from the axis start. When the anchor runs parallel to the axis
/// (or is degenerate) the orthogonal projection is used instead.
pub fn percent_of(point: Vector, axis: &Line, anchor: &Line) -> f64 {
    if axis.is_degenerate() {
        return 0.0;
    }
    let carrier = Line::new(point, point + anchor.direction());
    let t = match carrier.intersect(axis) {
        Some(foot) => axis.project(foot),
        None => axis.project(point),
    };
    t.clamp(0.0, 1.0)
}
