//! Lint engine for detecting defects in a finished web.
//!
//! Re-checks a generated geometry for mechanical problems: oversized gaps
//! between spokes, spokes inserted too close to a neighbour, spokes that do
//! not end on the border, zero-length threads, and auxiliary crossings whose
//! recorded order disagrees with their distance from the hub.

use std::fmt;

use super::config::WebParams;
use super::spokes::circular_gap;
use super::types::{SegmentRole, Spoke, WebGeometry};

/// Slack allowed on angle comparisons
const ANGLE_TOLERANCE: f64 = 1e-9;

/// Threads shorter than this are reported as degenerate
const MIN_SEGMENT_LENGTH: f64 = 1e-9;

/// A lint warning about a web defect
#[derive(Debug)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Gap,
    Clearance,
    Border,
    Degenerate,
    Ordering,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Gap => write!(f, "gap"),
            LintCategory::Clearance => write!(f, "clearance"),
            LintCategory::Border => write!(f, "border"),
            LintCategory::Degenerate => write!(f, "degenerate"),
            LintCategory::Ordering => write!(f, "ordering"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

/// Run all lint checks on a finished web.
pub fn check(geometry: &WebGeometry, params: &WebParams) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_gaps(&geometry.spokes, params, &mut warnings);
    check_clearance(geometry, params, &mut warnings);
    check_border(geometry, &mut warnings);
    check_segments(geometry, &mut warnings);
    check_ordering(&geometry.spokes, &mut warnings);
    warnings
}

// ── Angular gaps ──────────────────────────────────────────────────

fn check_gaps(spokes: &[Spoke], params: &WebParams, warnings: &mut Vec<LintWarning>) {
    if spokes.len() < 2 {
        return;
    }
    for (i, spoke) in spokes.iter().enumerate() {
        let next = &spokes[(i + 1) % spokes.len()];
        if i + 1 < spokes.len() && next.angle() < spoke.angle() {
            warnings.push(LintWarning {
                category: LintCategory::Gap,
                message: format!(
                    "spoke #{} ({:.3}°) is out of angle order after spoke #{} ({:.3}°)",
                    i + 1,
                    next.angle(),
                    i,
                    spoke.angle()
                ),
            });
        }
        let gap = circular_gap(spoke.angle(), next.angle());
        if gap > params.max_gap_degrees + ANGLE_TOLERANCE {
            warnings.push(LintWarning {
                category: LintCategory::Gap,
                message: format!(
                    "{:.3}° gap after spoke #{} exceeds the {:.3}° limit",
                    gap, i, params.max_gap_degrees
                ),
            });
        }
    }
}

// ── Insertion clearance ───────────────────────────────────────────

fn check_clearance(geometry: &WebGeometry, params: &WebParams, warnings: &mut Vec<LintWarning>) {
    for insertion in &geometry.insertions {
        let required = insertion.gap * params.min_clearance_factor;
        if insertion.clearance + ANGLE_TOLERANCE < required {
            warnings.push(LintWarning {
                category: LintCategory::Clearance,
                message: format!(
                    "spoke at {:.3}° kept {:.3}° from a neighbour, {:.3}° required",
                    insertion.angle, insertion.clearance, required
                ),
            });
        }
    }
}

// ── Border termination ────────────────────────────────────────────

fn check_border(geometry: &WebGeometry, warnings: &mut Vec<LintWarning>) {
    let border = geometry.frame.border();
    for (i, spoke) in geometry.spokes.iter().enumerate() {
        if spoke.start() != geometry.hub {
            warnings.push(LintWarning {
                category: LintCategory::Border,
                message: format!("spoke #{} does not start at the hub", i),
            });
        }
        if !border.iter().any(|line| line.contains(spoke.end())) {
            warnings.push(LintWarning {
                category: LintCategory::Border,
                message: format!(
                    "spoke #{} ends at ({:.3}, {:.3}), off the border",
                    i,
                    spoke.end().x,
                    spoke.end().y
                ),
            });
        }
    }
}

// ── Degenerate threads ────────────────────────────────────────────

fn check_segments(geometry: &WebGeometry, warnings: &mut Vec<LintWarning>) {
    for (i, segment) in geometry.segments.iter().enumerate() {
        if segment.start.distance(segment.end) <= MIN_SEGMENT_LENGTH {
            warnings.push(LintWarning {
                category: LintCategory::Degenerate,
                message: format!("{:?} segment #{} has zero length", segment.role, i),
            });
        }
    }
    if geometry.count_role(SegmentRole::Spoke) != geometry.spokes.len() {
        warnings.push(LintWarning {
            category: LintCategory::Degenerate,
            message: format!(
                "{} spoke segments for {} spokes",
                geometry.count_role(SegmentRole::Spoke),
                geometry.spokes.len()
            ),
        });
    }
}

// ── Auxiliary ordering ────────────────────────────────────────────

fn check_ordering(spokes: &[Spoke], warnings: &mut Vec<LintWarning>) {
    for (i, spoke) in spokes.iter().enumerate() {
        let inversions = spoke
            .aux_points
            .windows(2)
            .filter(|w| w[1].distance < w[0].distance)
            .count();
        if inversions > 0 {
            warnings.push(LintWarning {
                category: LintCategory::Ordering,
                message: format!(
                    "spoke #{} has {} auxiliary crossing(s) recorded closer to the hub than the one before",
                    i, inversions
                ),
            });
        }
    }
}
