//! Web generation: frame, spokes, auxiliary spiral, capture spiral
//!
//! Each stage consumes the full output of the previous one:
//!
//! 1. [`frame::build_frame`] places the triangle and hub.
//! 2. [`spokes::place_spokes`] seeds three spokes and fills the gaps.
//! 3. [`auxiliary::trace_auxiliary`] marks spacing on every spoke.
//! 4. [`capture::trace_capture`] lays the rings between those marks.
//!
//! ## Random stream
//!
//! A weave draws from one sequential generator, in this order:
//!
//! - frame: top A x, y; top B x, y; bottom x, y; hub x, y; then two end
//!   fractions for each of frame A, B and C (a zero `jitter_factor` draws
//!   nothing here, so the frame no longer depends on the seed);
//! - placement: one offset per attempt, per inserted spoke;
//! - auxiliary spiral: a direction, a start spoke, then one jitter per step;
//! - capture spiral: one jitter per lane point, in generation order.

pub mod auxiliary;
pub mod capture;
pub mod config;
pub mod error;
pub mod frame;
pub mod jitter;
pub mod lint;
pub mod spokes;
pub mod types;

pub use config::{AuxOrder, WebParams};
pub use error::WeaveError;
pub use lint::{LintCategory, LintWarning};
pub use types::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::Line;

/// Generate a web on a `width` × `height` canvas from `seed`
pub fn generate(
    width: f64,
    height: f64,
    params: &WebParams,
    seed: u64,
) -> Result<WebGeometry, WeaveError> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_with_rng(width, height, params, &mut rng)
}

/// Generate a web, drawing randomness from `rng`
pub fn generate_with_rng<R: Rng + ?Sized>(
    width: f64,
    height: f64,
    params: &WebParams,
    rng: &mut R,
) -> Result<WebGeometry, WeaveError> {
    validate_canvas(width, height)?;
    params.validate()?;

    let frame = frame::build_frame(width, height, params.jitter_factor, rng)?;
    let placement = spokes::place_spokes(&frame, params, rng)?;
    let mut spokes = placement.spokes;
    let aux = auxiliary::trace_auxiliary(
        &mut spokes,
        params.ring_count,
        params.spiral_jitter,
        rng,
    )?;
    let capture = capture::trace_capture(&mut spokes, &aux, params, rng);

    let segments = assemble_segments(&frame, &spokes, &aux.segments, &capture.segments);
    log::debug!(
        "weave complete: {} spokes, {} segments",
        spokes.len(),
        segments.len()
    );

    Ok(WebGeometry {
        width,
        height,
        hub: frame.hub,
        origins: frame.origins(),
        frame,
        spokes,
        insertions: placement.insertions,
        terminal_spoke: aux.terminal,
        aux_direction: aux.direction,
        segments,
    })
}

fn validate_canvas(width: f64, height: f64) -> Result<(), WeaveError> {
    for (name, value) in [("width", width), ("height", height)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(WeaveError::invalid_param(
                name,
                format!("canvas {} must be a positive number, got {}", name, value),
            ));
        }
    }
    Ok(())
}

/// Flatten every thread into one tagged list, frame first
fn assemble_segments(
    frame: &WebFrame,
    spokes: &[Spoke],
    auxiliary: &[Line],
    capture: &[Line],
) -> Vec<Segment> {
    let mut segments = vec![
        Segment::new(SegmentRole::Bridge, &frame.bridge),
        Segment::new(SegmentRole::AnchorA, &frame.anchor_a),
        Segment::new(SegmentRole::AnchorB, &frame.anchor_b),
        Segment::new(SegmentRole::FrameA, &frame.frame_a),
        Segment::new(SegmentRole::FrameB, &frame.frame_b),
        Segment::new(SegmentRole::FrameC, &frame.frame_c),
    ];
    segments.extend(
        frame
            .branches
            .iter()
            .map(|line| Segment::new(SegmentRole::Branch, line)),
    );
    segments.extend(
        spokes
            .iter()
            .map(|spoke| Segment::new(SegmentRole::Spoke, spoke.line())),
    );
    segments.extend(
        auxiliary
            .iter()
            .map(|line| Segment::new(SegmentRole::Auxiliary, line)),
    );
    segments.extend(
        capture
            .iter()
            .map(|line| Segment::new(SegmentRole::Capture, line)),
    );
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default() {
        let web = generate(800.0, 600.0, &WebParams::default(), 42).unwrap();
        assert!(web.spokes.len() >= 12);
        assert_eq!(web.count_role(SegmentRole::Bridge), 1);
        assert_eq!(web.count_role(SegmentRole::Branch), 3);
        assert_eq!(web.count_role(SegmentRole::Spoke), web.spokes.len());
        assert!(web.count_role(SegmentRole::Auxiliary) > 0);
        assert!(web.count_role(SegmentRole::Capture) > 0);
    }

    #[test]
    fn test_segments_are_grouped_by_role() {
        let web = generate(640.0, 480.0, &WebParams::default(), 7).unwrap();
        let first_aux = web
            .segments
            .iter()
            .position(|s| s.role == SegmentRole::Auxiliary)
            .unwrap();
        assert!(web.segments[..first_aux]
            .iter()
            .all(|s| s.role != SegmentRole::Capture));
        assert_eq!(web.segments[0].role, SegmentRole::Bridge);
    }

    #[test]
    fn test_invalid_canvas() {
        let err = generate(0.0, 600.0, &WebParams::default(), 1).unwrap_err();
        assert!(matches!(err, WeaveError::InvalidParams { ref name, .. } if name == "width"));
        let err = generate(800.0, f64::INFINITY, &WebParams::default(), 1).unwrap_err();
        assert!(matches!(err, WeaveError::InvalidParams { ref name, .. } if name == "height"));
    }

    #[test]
    fn test_invalid_params_checked_first() {
        let params = WebParams::default().with_cap_capacity(0);
        let err = generate(800.0, 600.0, &params, 1).unwrap_err();
        assert!(matches!(err, WeaveError::InvalidParams { .. }));
    }
}
