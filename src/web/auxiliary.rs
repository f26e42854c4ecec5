//! Auxiliary spiral: an outward walk that marks even spacing on every spoke
//!
//! The spiral starts one ring width out on a random spoke and steps from
//! spoke to spoke in a random direction, growing by a fixed increment per
//! step so that one full lap adds one ring width. Ring width is measured on
//! the shortest spoke, so the walk ends (at the "terminal" spoke) as soon as
//! it would run off the end of the spoke it just reached.

use rand::Rng;

use crate::geometry::{Line, Vector};

use super::error::WeaveError;
use super::jitter::fuzz;
use super::types::{AuxPoint, Direction, Spoke};

/// Outcome of the auxiliary walk
#[derive(Debug, Clone)]
pub struct AuxiliaryTrace {
    /// Threads between consecutive crossings, in walk order
    pub segments: Vec<Line>,
    /// Spoke the walk stopped on
    pub terminal: usize,
    pub direction: Direction,
}

pub fn trace_auxiliary<R: Rng + ?Sized>(
    spokes: &mut [Spoke],
    ring_count: usize,
    jitter: f64,
    rng: &mut R,
) -> Result<AuxiliaryTrace, WeaveError> {
    let count = spokes.len();
    if count == 0 || ring_count == 0 {
        return Err(WeaveError::degenerate("nothing to trace the auxiliary spiral on"));
    }

    let reference = spokes
        .iter()
        .map(Spoke::length)
        .fold(f64::INFINITY, f64::min);
    let ring_width = reference / ring_count as f64;
    let increment = ring_width / count as f64;

    let direction = if rng.gen_bool(0.5) {
        Direction::Clockwise
    } else {
        Direction::CounterClockwise
    };
    let mut index = rng.gen_range(0..count);
    let mut sweep = ring_width;
    let mut previous = cross(&mut spokes[index], sweep, sweep);
    let mut segments = Vec::new();

    loop {
        index = direction.step(index, count);
        sweep += increment;
        let length = spokes[index].length();
        let distance = fuzz(rng, sweep, jitter).min(length);
        let point = cross(&mut spokes[index], distance, sweep);
        segments.push(Line::new(previous, point));
        previous = point;
        if sweep >= length {
            break;
        }
    }

    log::debug!(
        "auxiliary spiral: {} steps, terminal spoke {} ({:?})",
        segments.len(),
        index,
        direction
    );
    Ok(AuxiliaryTrace {
        segments,
        terminal: index,
        direction,
    })
}

/// Record a crossing `distance` out on `spoke`
fn cross(spoke: &mut Spoke, distance: f64, sweep: f64) -> Vector {
    let point = spoke.line().point_at_abs(distance);
    spoke.aux_points.push(AuxPoint {
        point,
        distance,
        sweep,
    });
    point
}
