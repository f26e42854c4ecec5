//! Frame construction: triangle, hub and corner-cutting frame threads
//!
//! 1. Three origins are placed near the top corners and the bottom middle of
//!    the canvas, each coordinate jittered.
//! 2. The angle bisectors at the two top origins meet near the incenter,
//!    which is jittered again to give the hub.
//! 3. Each origin gets a branch line to the hub. A line perpendicular to the
//!    branch, `radius` away from the hub, cuts across that origin's corner;
//!    its crossings with the two edges meeting at the origin are jittered
//!    along those edges and become a frame thread.
//!
//! `radius` approximates the incircle radius: the shortest distance from the
//! hub to where an origin's axis, extended past the hub, meets the opposite
//! edge.

use rand::Rng;

use crate::geometry::{Line, Vector};

use super::error::WeaveError;
use super::jitter::fuzz;
use super::types::WebFrame;

/// Fractional canvas positions of the three origins before jitter
const TOP_INSET: (f64, f64) = (0.1, 0.1);
const BOTTOM_POSITION: (f64, f64) = (0.5, 0.9);

/// Build a jittered frame for a `width` × `height` canvas
pub fn build_frame<R: Rng + ?Sized>(
    width: f64,
    height: f64,
    jitter: f64,
    rng: &mut R,
) -> Result<WebFrame, WeaveError> {
    let top_a = Vector::new(
        fuzz(rng, width * TOP_INSET.0, jitter),
        fuzz(rng, height * TOP_INSET.1, jitter),
    );
    let top_b = Vector::new(
        fuzz(rng, width * (1.0 - TOP_INSET.0), jitter),
        fuzz(rng, height * TOP_INSET.1, jitter),
    );
    let bottom = Vector::new(
        fuzz(rng, width * BOTTOM_POSITION.0, jitter),
        fuzz(rng, height * BOTTOM_POSITION.1, jitter),
    );
    frame_from_origins(top_a, top_b, bottom, jitter, rng)
}

/// Build a frame around three given origins
pub fn frame_from_origins<R: Rng + ?Sized>(
    top_a: Vector,
    top_b: Vector,
    bottom: Vector,
    jitter: f64,
    rng: &mut R,
) -> Result<WebFrame, WeaveError> {
    let bisector_a = bisector(top_a, bottom, top_b)?;
    let bisector_b = bisector(top_b, bottom, top_a)?;
    let incenter = bisector_a
        .intersect(&bisector_b)
        .ok_or_else(|| WeaveError::degenerate("angle bisectors are parallel"))?;

    let hub = Vector::new(
        fuzz(rng, incenter.x, jitter),
        fuzz(rng, incenter.y, jitter),
    );
    if !strictly_inside(hub, [top_a, top_b, bottom]) {
        return Err(WeaveError::degenerate(format!(
            "hub ({:.3}, {:.3}) falls outside the frame triangle",
            hub.x, hub.y
        )));
    }

    let bridge = Line::new(top_a, top_b);
    let anchor_a = Line::new(top_a, bottom);
    let anchor_b = Line::new(top_b, bottom);
    let branches = [
        Line::new(top_a, hub),
        Line::new(top_b, hub),
        Line::new(bottom, hub),
    ];

    let radius = incircle_radius(hub, &branches, [&anchor_b, &anchor_a, &bridge])?;

    // Edges meeting at each origin, oriented away from it
    let frame_a = corner_cut(hub, top_a, radius, [bridge, anchor_a], jitter, rng)?;
    let frame_b = corner_cut(hub, top_b, radius, [bridge.reverse(), anchor_b], jitter, rng)?;
    let frame_c = corner_cut(
        hub,
        bottom,
        radius,
        [anchor_a.reverse(), anchor_b.reverse()],
        jitter,
        rng,
    )?;

    log::debug!(
        "frame: hub=({:.2}, {:.2}) radius={:.2}",
        hub.x,
        hub.y,
        radius
    );

    Ok(WebFrame {
        top_a,
        top_b,
        bottom,
        hub,
        bridge,
        anchor_a,
        anchor_b,
        frame_a,
        frame_b,
        frame_c,
        branches,
    })
}

/// Bisector of the angle at `at` between the rays towards `p` and `q`
fn bisector(at: Vector, p: Vector, q: Vector) -> Result<Line, WeaveError> {
    let (Some(u), Some(v)) = ((p - at).unit(), (q - at).unit()) else {
        return Err(WeaveError::degenerate("two frame origins coincide"));
    };
    let direction = u + v;
    if direction.magnitude() <= f64::EPSILON {
        return Err(WeaveError::degenerate("frame origins are collinear"));
    }
    Ok(Line::new(at, at + direction))
}

fn strictly_inside(point: Vector, [a, b, c]: [Vector; 3]) -> bool {
    let d1 = (b - a).cross(point - a);
    let d2 = (c - b).cross(point - b);
    let d3 = (a - c).cross(point - c);
    (d1 > 0.0 && d2 > 0.0 && d3 > 0.0) || (d1 < 0.0 && d2 < 0.0 && d3 < 0.0)
}

/// Shortest hub-to-opposite-edge distance along the three origin axes
fn incircle_radius(
    hub: Vector,
    branches: &[Line; 3],
    opposite: [&Line; 3],
) -> Result<f64, WeaveError> {
    let mut radius = f64::INFINITY;
    for (branch, edge) in branches.iter().zip(opposite) {
        let hit = branch
            .intersect(edge)
            .ok_or_else(|| WeaveError::degenerate("an origin axis runs parallel to its opposite edge"))?;
        radius = radius.min(hub.distance(hit));
    }
    if !(radius.is_finite() && radius > 0.0) {
        return Err(WeaveError::degenerate("hub touches the frame triangle"));
    }
    Ok(radius)
}

/// Frame thread across the corner at `origin`
fn corner_cut<R: Rng + ?Sized>(
    hub: Vector,
    origin: Vector,
    radius: f64,
    edges: [Line; 2],
    jitter: f64,
    rng: &mut R,
) -> Result<Line, WeaveError> {
    let axis = Line::new(hub, origin);
    if radius >= axis.length() {
        return Err(WeaveError::degenerate(
            "incircle radius reaches past a frame origin",
        ));
    }
    let foot = axis.point_at_abs(radius);
    let perpendicular = Line::new(foot, foot + axis.direction().perpendicular());

    let mut ends = [Vector::ZERO; 2];
    for (end, edge) in ends.iter_mut().zip(edges) {
        let hit = perpendicular
            .intersect(&edge)
            .ok_or_else(|| WeaveError::degenerate("frame thread runs parallel to a triangle edge"))?;
        let t = fuzz(rng, edge.project(hit), jitter).clamp(0.0, 1.0);
        *end = edge.point_at(t);
    }
    Ok(Line::new(ends[0], ends[1]))
}
