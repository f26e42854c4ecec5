//! Error types for web generation

use thiserror::Error;

/// Errors that abort a weave
///
/// Every variant aborts the whole run; no partial geometry is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeaveError {
    /// The frame triangle cannot produce a usable hub
    #[error("degenerate frame: {reason}")]
    DegenerateFrame { reason: String },

    /// No candidate angle satisfied the clearance constraint
    #[error("placement exhausted: no spoke fits a {gap:.3}° gap after {attempts} attempts")]
    PlacementExhausted { gap: f64, attempts: usize },

    /// A ray from the hub never met the border set
    #[error("no border intersection for a ray at {angle:.3}°")]
    NoBorderIntersection { angle: f64 },

    /// An option is outside its allowed range
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParams { name: String, reason: String },
}

impl WeaveError {
    /// Create a degenerate frame error
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateFrame {
            reason: reason.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_param(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Whether re-running with another seed could succeed
    pub fn is_seed_dependent(&self) -> bool {
        matches!(
            self,
            Self::DegenerateFrame { .. } | Self::PlacementExhausted { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_display() {
        let err = WeaveError::degenerate("angle bisectors are parallel");
        insta::assert_snapshot!(err.to_string(), @"degenerate frame: angle bisectors are parallel");
    }

    #[test]
    fn test_placement_exhausted_display() {
        let err = WeaveError::PlacementExhausted {
            gap: 120.0,
            attempts: 64,
        };
        insta::assert_snapshot!(
            err.to_string(),
            @"placement exhausted: no spoke fits a 120.000° gap after 64 attempts"
        );
    }

    #[test]
    fn test_invalid_param_display() {
        let err = WeaveError::invalid_param("ring_count", "must be at least 1");
        assert!(err.to_string().contains("ring_count"));
        assert!(!err.is_seed_dependent());
    }
}
