//! Spoke placement by circular gap filling
//!
//! Three seed spokes point from the hub at the three origins. The sorted
//! list is then walked as a ring: whenever the gap between a spoke and its
//! successor exceeds `max_gap_degrees`, a new spoke is cast at a random angle
//! inside the gap (keeping `min_clearance_factor` of the gap from both sides)
//! and the same pair is examined again. The walk ends once a full lap passes
//! without an insertion.

use rand::Rng;

use crate::geometry::vector::normalize_degrees;
use crate::geometry::{Line, Vector};

use super::config::WebParams;
use super::error::WeaveError;
use super::types::{Insertion, Spoke, WebFrame};

/// Minimum distance along a ray for a border hit to count as "ahead"
const RAY_EPSILON: f64 = 1e-9;

/// Result of spoke placement
#[derive(Debug, Clone)]
pub struct Placement {
    /// Sorted by angle
    pub spokes: Vec<Spoke>,
    /// Inserted spokes in insertion order
    pub insertions: Vec<Insertion>,
}

/// Clockwise angular distance from `from` to `to`, in [0, 360)
pub fn circular_gap(from: f64, to: f64) -> f64 {
    (to - from + 360.0).rem_euclid(360.0)
}

/// First point where a ray from `hub` at `angle` meets a border line
///
/// Border lines are treated as infinite; only hits ahead of the hub along
/// the ray qualify, and the nearest one wins. For a convex border around
/// the hub that is exactly where the ray leaves the web.
pub fn cast_ray(hub: Vector, angle: f64, border: &[Line]) -> Result<Vector, WeaveError> {
    let direction = Vector::from_angle(angle);
    let ray = Line::new(hub, hub + direction);

    border
        .iter()
        .filter_map(|line| ray.intersect(line))
        .map(|hit| ((hit - hub).dot(direction), hit))
        .filter(|(reach, _)| *reach > RAY_EPSILON)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, hit)| hit)
        .ok_or(WeaveError::NoBorderIntersection { angle })
}

/// One spoke towards each origin, sorted by angle
pub fn seed_spokes(frame: &WebFrame) -> Result<Vec<Spoke>, WeaveError> {
    let border = frame.border();
    let mut spokes = frame
        .origins()
        .iter()
        .map(|origin| {
            let angle = origin.angle_around(frame.hub);
            cast_ray(frame.hub, angle, &border).map(|end| Spoke::new(frame.hub, end, angle))
        })
        .collect::<Result<Vec<_>, _>>()?;
    spokes.sort_by(|a, b| a.angle().total_cmp(&b.angle()));
    Ok(spokes)
}

/// Seed the frame's spokes and fill every oversized gap
pub fn place_spokes<R: Rng + ?Sized>(
    frame: &WebFrame,
    params: &WebParams,
    rng: &mut R,
) -> Result<Placement, WeaveError> {
    let border = frame.border();
    let mut spokes = seed_spokes(frame)?;
    let mut insertions = Vec::new();

    let mut index = 0;
    // Consecutive pairs examined without inserting
    let mut quiet = 0;
    while quiet < spokes.len() {
        let len = spokes.len();
        let current = spokes[index].angle();
        let gap = circular_gap(current, spokes[(index + 1) % len].angle());

        if gap <= params.max_gap_degrees {
            index = (index + 1) % len;
            quiet += 1;
            continue;
        }

        let (offset, attempts) = sample_offset(
            gap,
            params.min_clearance_factor,
            params.max_placement_attempts,
            rng,
        )?;
        let angle = normalize_degrees(current + offset);
        let end = cast_ray(frame.hub, angle, &border)?;

        let position = spokes.partition_point(|s| s.angle() < angle);
        spokes.insert(position, Spoke::new(frame.hub, end, angle));
        if position <= index {
            // Inserted across the wrap; the current spoke shifted right
            index += 1;
        }

        log::trace!(
            "spoke at {:.3}° splits a {:.3}° gap after {} attempt(s)",
            angle,
            gap,
            attempts
        );
        insertions.push(Insertion {
            angle,
            gap,
            clearance: offset.min(gap - offset),
            attempts,
        });
        quiet = 0;
    }

    log::debug!(
        "placed {} spokes ({} inserted)",
        spokes.len(),
        insertions.len()
    );
    Ok(Placement { spokes, insertions })
}

/// Offset into a `gap` that keeps `clearance_factor × gap` from both ends
fn sample_offset<R: Rng + ?Sized>(
    gap: f64,
    clearance_factor: f64,
    max_attempts: usize,
    rng: &mut R,
) -> Result<(f64, usize), WeaveError> {
    let clearance = gap * clearance_factor;
    for attempt in 1..=max_attempts {
        let offset = rng.gen_range(0.0..gap);
        if offset >= clearance && gap - offset >= clearance {
            return Ok((offset, attempt));
        }
    }
    Err(WeaveError::PlacementExhausted {
        gap,
        attempts: max_attempts,
    })
}
