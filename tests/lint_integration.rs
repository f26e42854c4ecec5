//! Integration tests for web linting

use orb_weaver::geometry::Vector;
use orb_weaver::web::lint::check;
use orb_weaver::web::{LintCategory, Segment, SegmentRole};
use orb_weaver::{generate, WebParams};

fn categories(warnings: &[orb_weaver::LintWarning]) -> Vec<String> {
    warnings.iter().map(|w| w.category.to_string()).collect()
}

#[test]
fn test_true_negatives_clean() {
    let params = WebParams::default();
    for seed in [1, 42, 2024] {
        let web = generate(800.0, 600.0, &params, seed).expect("Should weave");
        let warnings = check(&web, &params);
        assert!(
            warnings.is_empty(),
            "Expected no warnings for seed {}, got: {:?}",
            seed,
            warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>()
        );
    }
}

#[test]
fn test_removed_spoke_reported() {
    let params = WebParams::default();
    let mut web = generate(800.0, 600.0, &params, 42).expect("Should weave");
    // Drop every other spoke; the geometry still lists their segments
    let mut keep = false;
    web.spokes.retain(|_| {
        keep = !keep;
        keep
    });

    let found = categories(&check(&web, &params));
    assert!(
        found.contains(&"gap".to_string()),
        "Expected gap warning, got: {:?}",
        found
    );
    assert!(
        found.contains(&"degenerate".to_string()),
        "Expected degenerate warning, got: {:?}",
        found
    );
}

#[test]
fn test_tighter_limits_flag_existing_web() {
    let loose = WebParams::default()
        .with_max_gap_degrees(60.0)
        .with_min_clearance_factor(0.1);
    let web = generate(800.0, 600.0, &loose, 7).expect("Should weave");

    let strict = WebParams::default()
        .with_max_gap_degrees(1.0)
        .with_min_clearance_factor(0.5);
    let warnings = check(&web, &strict);
    assert!(warnings.iter().any(|w| w.category == LintCategory::Gap));
}

#[test]
fn test_zero_length_segment_reported() {
    let params = WebParams::default();
    let mut web = generate(800.0, 600.0, &params, 42).expect("Should weave");
    web.segments.push(Segment {
        role: SegmentRole::Capture,
        start: web.hub,
        end: web.hub,
    });
    let warnings = check(&web, &params);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].category, LintCategory::Degenerate);
    assert!(warnings[0].message.contains("Capture"));
}

#[test]
fn test_loose_spoke_end_reported() {
    let params = WebParams::default();
    let mut web = generate(800.0, 600.0, &params, 42).expect("Should weave");
    let shifted = web.hub + Vector::new(0.5, 0.5);
    web.hub = shifted;

    let warnings = check(&web, &params);
    let border: Vec<_> = warnings
        .iter()
        .filter(|w| w.category == LintCategory::Border)
        .collect();
    assert_eq!(border.len(), web.spokes.len());
}
