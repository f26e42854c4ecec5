//! Tunable parameters for a weave

use serde::{Deserialize, Serialize};

use super::error::WeaveError;

/// How the capture tracer orders the auxiliary crossings on each spoke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuxOrder {
    /// Sort crossings by distance from the hub, outermost first
    #[default]
    Distance,
    /// Take crossings latest-recorded first, without sorting
    Recorded,
}

/// Configuration options for web generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WebParams {
    /// Largest angular gap (degrees) allowed between neighbouring spokes
    pub max_gap_degrees: f64,

    /// Fraction of a gap that a new spoke must keep from both neighbours
    pub min_clearance_factor: f64,

    /// Number of auxiliary spiral revolutions across the shortest spoke
    pub ring_count: usize,

    /// Capture rings laid inside each auxiliary zone
    pub cap_capacity: usize,

    /// Relative jitter applied while building the frame
    pub jitter_factor: f64,

    /// Relative jitter applied to spiral distances and ring subdivisions
    pub spiral_jitter: f64,

    /// Resample bound for a single spoke insertion
    pub max_placement_attempts: usize,

    /// Ordering of auxiliary crossings seen by the capture tracer
    pub aux_order: AuxOrder,
}

impl Default for WebParams {
    fn default() -> Self {
        Self {
            max_gap_degrees: 30.0,
            min_clearance_factor: 0.25,
            ring_count: 5,
            cap_capacity: 2,
            jitter_factor: 0.1,
            spiral_jitter: 0.05,
            max_placement_attempts: 64,
            aux_order: AuxOrder::Distance,
        }
    }
}

impl WebParams {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_gap_degrees(mut self, degrees: f64) -> Self {
        self.max_gap_degrees = degrees;
        self
    }

    pub fn with_min_clearance_factor(mut self, factor: f64) -> Self {
        self.min_clearance_factor = factor;
        self
    }

    pub fn with_ring_count(mut self, rings: usize) -> Self {
        self.ring_count = rings;
        self
    }

    pub fn with_cap_capacity(mut self, capacity: usize) -> Self {
        self.cap_capacity = capacity;
        self
    }

    pub fn with_jitter_factor(mut self, factor: f64) -> Self {
        self.jitter_factor = factor;
        self
    }

    pub fn with_spiral_jitter(mut self, factor: f64) -> Self {
        self.spiral_jitter = factor;
        self
    }

    pub fn with_max_placement_attempts(mut self, attempts: usize) -> Self {
        self.max_placement_attempts = attempts;
        self
    }

    pub fn with_aux_order(mut self, order: AuxOrder) -> Self {
        self.aux_order = order;
        self
    }

    /// Check every option against its allowed range
    pub fn validate(&self) -> Result<(), WeaveError> {
        if !(self.max_gap_degrees.is_finite() && self.max_gap_degrees > 0.0) {
            return Err(WeaveError::invalid_param(
                "max_gap_degrees",
                format!("must be a positive number, got {}", self.max_gap_degrees),
            ));
        }
        if !(self.min_clearance_factor > 0.0 && self.min_clearance_factor < 1.0) {
            return Err(WeaveError::invalid_param(
                "min_clearance_factor",
                format!(
                    "must lie strictly between 0 and 1, got {}",
                    self.min_clearance_factor
                ),
            ));
        }
        if self.ring_count == 0 {
            return Err(WeaveError::invalid_param("ring_count", "must be at least 1"));
        }
        if self.cap_capacity == 0 {
            return Err(WeaveError::invalid_param("cap_capacity", "must be at least 1"));
        }
        if !(self.jitter_factor.is_finite() && self.jitter_factor >= 0.0) {
            return Err(WeaveError::invalid_param(
                "jitter_factor",
                format!("must be a non-negative number, got {}", self.jitter_factor),
            ));
        }
        if !(self.spiral_jitter >= 0.0 && self.spiral_jitter < 1.0) {
            return Err(WeaveError::invalid_param(
                "spiral_jitter",
                format!("must lie in [0, 1), got {}", self.spiral_jitter),
            ));
        }
        if self.max_placement_attempts == 0 {
            return Err(WeaveError::invalid_param(
                "max_placement_attempts",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
