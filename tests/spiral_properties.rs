//! Structural properties of generated webs, checked over a spread of seeds

use orb_weaver::web::capture::zone_bounds;
use orb_weaver::web::spokes::circular_gap;
use orb_weaver::{generate, AuxOrder, SegmentRole, WebGeometry, WebParams};

const SEEDS: [u64; 8] = [0, 1, 7, 42, 99, 1234, 65535, 987_654_321];

fn webs(params: &WebParams) -> Vec<(u64, WebGeometry)> {
    SEEDS
        .iter()
        .map(|&seed| {
            let web = generate(800.0, 600.0, params, seed)
                .unwrap_or_else(|e| panic!("seed {} failed: {}", seed, e));
            (seed, web)
        })
        .collect()
}

#[test]
fn test_no_gap_exceeds_limit() {
    for max_gap in [12.0, 30.0, 45.0] {
        let params = WebParams::default().with_max_gap_degrees(max_gap);
        for (seed, web) in webs(&params) {
            let n = web.spokes.len();
            for i in 0..n {
                let gap = circular_gap(web.spokes[i].angle(), web.spokes[(i + 1) % n].angle());
                assert!(
                    gap <= max_gap + 1e-9,
                    "seed {}: gap {} after spoke {} exceeds {}",
                    seed,
                    gap,
                    i,
                    max_gap
                );
            }
        }
    }
}

#[test]
fn test_spokes_sorted_and_in_range() {
    for (seed, web) in webs(&WebParams::default()) {
        assert!(
            web.spokes.windows(2).all(|w| w[0].angle() < w[1].angle()),
            "seed {}: spokes out of order",
            seed
        );
        assert!(web
            .spokes
            .iter()
            .all(|s| (0.0..360.0).contains(&s.angle())));
    }
}

#[test]
fn test_insertions_keep_clearance() {
    let params = WebParams::default()
        .with_max_gap_degrees(15.0)
        .with_min_clearance_factor(0.3);
    for (seed, web) in webs(&params) {
        for insertion in &web.insertions {
            assert!(
                insertion.clearance >= insertion.gap * params.min_clearance_factor,
                "seed {}: {:?}",
                seed,
                insertion
            );
            assert!(insertion.attempts >= 1 && insertion.attempts <= params.max_placement_attempts);
        }
        assert_eq!(web.insertions.len(), web.spokes.len() - 3);
    }
}

#[test]
fn test_spokes_run_from_hub_to_border() {
    for (seed, web) in webs(&WebParams::default()) {
        let border = web.frame.border();
        for (i, spoke) in web.spokes.iter().enumerate() {
            assert_eq!(spoke.start(), web.hub);
            assert!(
                border.iter().any(|line| line.contains(spoke.end())),
                "seed {}: spoke {} ends off the border",
                seed,
                i
            );
        }
    }
}

#[test]
fn test_aux_sweep_monotonic_and_bounded() {
    let params = WebParams::default();
    for (seed, web) in webs(&params) {
        let n = web.spokes.len();
        let mut sweeps: Vec<f64> = web
            .spokes
            .iter()
            .flat_map(|s| s.aux_points.iter().map(|a| a.sweep))
            .collect();
        for spoke in &web.spokes {
            assert!(spoke.aux_points.windows(2).all(|w| w[0].sweep < w[1].sweep));
            assert!(spoke
                .aux_points
                .iter()
                .all(|a| a.distance <= spoke.length() + 1e-9));
        }

        // Every crossing carries a distinct sweep; one more crossing than threads
        sweeps.sort_by(f64::total_cmp);
        sweeps.dedup();
        let steps = web.count_role(SegmentRole::Auxiliary);
        assert_eq!(sweeps.len(), steps + 1, "seed {}", seed);
        assert!(
            steps <= 2 * params.ring_count * n,
            "seed {}: {} steps for {} spokes",
            seed,
            steps,
            n
        );
    }
}

#[test]
fn test_capture_bounded_and_nonzero() {
    for capacity in [1, 2, 3] {
        let params = WebParams::default().with_cap_capacity(capacity);
        for (seed, web) in webs(&params) {
            let rings = web
                .spokes
                .iter()
                .map(|s| s.aux_points.len())
                .max()
                .unwrap_or(0);
            let captures: Vec<_> = web.segments_with_role(SegmentRole::Capture).collect();
            assert!(
                captures.len() <= capacity * rings * web.spokes.len(),
                "seed {}: {} capture segments",
                seed,
                captures.len()
            );
            assert!(!captures.is_empty(), "seed {}: no capture spiral", seed);
            assert!(captures.iter().all(|s| s.start.distance(s.end) > 1e-9));
        }
    }
}

#[test]
fn test_capture_points_stay_inside_zones() {
    for order in [AuxOrder::Distance, AuxOrder::Recorded] {
        let params = WebParams::default().with_aux_order(order);
        for (seed, web) in webs(&params) {
            for spoke in &web.spokes {
                let bounds = zone_bounds(spoke, order);
                let outermost = bounds.iter().copied().fold(0.0, f64::max);
                for point in &spoke.cap_points {
                    let reach = spoke.start().distance(*point);
                    assert!(
                        reach <= outermost + 1e-6,
                        "seed {}: capture point beyond the outermost crossing",
                        seed
                    );
                    assert!(spoke.line().contains(*point));
                }
            }
        }
    }
}

#[test]
fn test_terminal_spoke_is_reported() {
    for (seed, web) in webs(&WebParams::default()) {
        assert!(web.terminal_spoke < web.spokes.len(), "seed {}", seed);
        let terminal = &web.spokes[web.terminal_spoke];
        let last = terminal.aux_points.last().expect("terminal spoke was crossed");
        assert!(last.sweep >= terminal.length());
    }
}
