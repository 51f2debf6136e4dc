use blob_core::*;

fn p(x: f64, y: f64) -> Point2D {
    Point2D::new(x, y)
}

#[test]
fn advance_closes_fraction_of_gap() {
    let next = advance(p(0.0, 0.0), p(100.0, 0.0), 0.1);
    assert!((next.x - 10.0).abs() < 1e-12);
    assert_eq!(next.y, 0.0);
}

#[test]
fn advance_moves_strictly_closer_for_all_factors() {
    let target = p(-37.5, 212.0);
    let starts = [p(0.0, 0.0), p(400.0, 300.0), p(-500.0, -1.0), p(-37.0, 212.0)];
    for start in starts {
        for k in 1..=20 {
            let factor = k as f64 / 20.0;
            let before = start.distance(target);
            let after = advance(start, target, factor).distance(target);
            assert!(
                after < before,
                "factor {factor}: {after} not closer than {before}"
            );
        }
    }
}

#[test]
fn advance_is_idempotent_at_target() {
    let target = p(12.0, -4.0);
    assert_eq!(advance(target, target, 0.3), target);
}

#[test]
fn full_factor_snaps_to_target() {
    let next = advance(p(5.0, 5.0), p(80.0, -20.0), 1.0);
    assert_eq!(next, p(80.0, -20.0));
}

#[test]
fn focal_state_only_moves_current_on_step() {
    let mut focal = FocalState::at(p(400.0, 300.0));
    focal.set_target(p(500.0, 300.0));
    assert_eq!(focal.current(), p(400.0, 300.0));
    let after = focal.step(0.5);
    assert_eq!(after, p(450.0, 300.0));
    assert_eq!(focal.target(), p(500.0, 300.0));
}

#[test]
fn hundred_frames_converge_within_one_unit() {
    let mut focal = FocalState::at(p(400.0, 300.0));
    let target = p(780.0, 20.0);
    focal.set_target(target);
    for _ in 0..100 {
        focal.step(DEFAULT_SMOOTHING);
    }
    assert!(focal.current().distance(target) < 1.0);
}
