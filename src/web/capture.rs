//! Capture spiral: nested rings laid inside the auxiliary zones
//!
//! A zone is the stretch of a spoke between two neighbouring auxiliary
//! crossings; zone level 0 is the outermost. Each zone holds `cap_capacity`
//! lanes at evenly spaced (then jittered) fractions.
//!
//! Lanes start on the terminal spoke. For each level, every lane walks once
//! around the web against the auxiliary direction, dropping a point in the
//! current zone of each spoke it passes, and comes back to the terminal
//! spoke one zone deeper. That arrival is queued as the lane's start for the
//! next level. Tracing stops when the terminal spoke runs out of zones.

use std::collections::VecDeque;

use rand::Rng;

use crate::geometry::{Line, Vector};

use super::auxiliary::AuxiliaryTrace;
use super::config::{AuxOrder, WebParams};
use super::jitter::fuzz;
use super::types::Spoke;

/// Segments shorter than this are dropped
const ZERO_LENGTH: f64 = 1e-9;

/// Outcome of capture tracing
#[derive(Debug, Clone, Default)]
pub struct CaptureTrace {
    pub segments: Vec<Line>,
    /// Ring levels traced
    pub levels: usize,
    /// Zero-length segments that were dropped
    pub dropped: usize,
}

pub fn trace_capture<R: Rng + ?Sized>(
    spokes: &mut [Spoke],
    aux: &AuxiliaryTrace,
    params: &WebParams,
    rng: &mut R,
) -> CaptureTrace {
    let count = spokes.len();
    let mut trace = CaptureTrace::default();
    if count == 0 {
        return trace;
    }

    let bounds: Vec<Vec<f64>> = spokes
        .iter()
        .map(|s| zone_bounds(s, params.aux_order))
        .collect();
    let zones = |index: usize| bounds[index].len().saturating_sub(1);

    let terminal = aux.terminal;
    let direction = aux.direction.reversed();
    let capacity = params.cap_capacity;
    let lanes = Lanes {
        capacity,
        jitter: params.spiral_jitter,
    };

    if zones(terminal) == 0 {
        log::debug!("capture spiral: terminal spoke has no auxiliary zone");
        return trace;
    }

    let mut ring_ends = VecDeque::with_capacity(capacity);
    for lane in 0..capacity {
        let point = lanes.point(&spokes[terminal], &bounds[terminal], 0, lane, rng);
        spokes[terminal].cap_points.push(point);
        ring_ends.push_back(point);
    }

    let mut level = 0;
    while level < zones(terminal) {
        for lane in 0..capacity {
            let Some(ring_end) = ring_ends.pop_front() else {
                break;
            };
            let mut previous = Some(ring_end);
            let mut index = terminal;

            for _ in 1..count {
                index = direction.step(index, count);
                if level >= zones(index) {
                    // No zone here at this depth; the chain breaks
                    previous = None;
                    continue;
                }
                let point = lanes.point(&spokes[index], &bounds[index], level, lane, rng);
                spokes[index].cap_points.push(point);
                if let Some(from) = previous {
                    trace.push(from, point);
                }
                previous = Some(point);
            }

            if level + 1 < zones(terminal) {
                let point = lanes.point(&spokes[terminal], &bounds[terminal], level + 1, lane, rng);
                spokes[terminal].cap_points.push(point);
                if let Some(from) = previous {
                    trace.push(from, point);
                }
                ring_ends.push_back(point);
            }
        }
        level += 1;
    }

    trace.levels = level;
    log::debug!(
        "capture spiral: {} levels, {} segments, {} dropped",
        trace.levels,
        trace.segments.len(),
        trace.dropped
    );
    trace
}

impl CaptureTrace {
    fn push(&mut self, from: Vector, to: Vector) {
        if from.distance(to) <= ZERO_LENGTH {
            log::trace!("dropping zero-length capture segment at ({:.3}, {:.3})", to.x, to.y);
            self.dropped += 1;
        } else {
            self.segments.push(Line::new(from, to));
        }
    }
}

/// Auxiliary crossing distances on `spoke`, outermost zone bound first
pub fn zone_bounds(spoke: &Spoke, order: AuxOrder) -> Vec<f64> {
    let mut distances: Vec<f64> = spoke.aux_points.iter().map(|a| a.distance).collect();
    match order {
        AuxOrder::Distance => distances.sort_by(|a, b| b.total_cmp(a)),
        AuxOrder::Recorded => distances.reverse(),
    }
    distances
}

struct Lanes {
    capacity: usize,
    jitter: f64,
}

impl Lanes {
    /// Point for `lane` inside zone `level` of `spoke`
    ///
    /// Lane 0 sits nearest the outer bound, the last lane nearest the inner.
    fn point<R: Rng + ?Sized>(
        &self,
        spoke: &Spoke,
        bounds: &[f64],
        level: usize,
        lane: usize,
        rng: &mut R,
    ) -> Vector {
        let length = spoke.length();
        let outer = bounds[level] / length;
        let inner = bounds[level + 1] / length;
        let step = (outer - inner) / (self.capacity + 1) as f64;
        let offset = fuzz(rng, (self.capacity - lane) as f64 * step, self.jitter);
        spoke.line().point_at(inner + offset)
    }
}
