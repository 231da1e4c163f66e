use super::*;

#[test]
fn phase_is_pure_function_of_time() {
    let p = Phase::new(1.3, 0.4);
    assert_eq!(p.sin(2.5), p.sin(2.5));
    assert!((p.sin(0.0) - 0.4f64.sin()).abs() < 1e-12);
    for step in 0..50 {
        let u = p.unit(f64::from(step) * 0.37);
        assert!((0.0..=1.0).contains(&u));
    }
}

#[test]
fn seeded_phases_decorrelate_neighbours() {
    let base = Phase::new(2.0, 0.0);
    let a = base.seeded(1);
    let b = base.seeded(2);
    assert_ne!(a, b);
    assert_ne!(a.sin(1.0), b.sin(1.0));
    assert_eq!(base.seeded(0), base);
}

#[test]
fn wobble_and_drift_stay_bounded() {
    let center = Point::new(0.5, 0.5);
    let amp = Vec2::new(0.1, 0.05);
    for step in 0..200 {
        let t = f64::from(step) * 0.11;
        let w = wobble(t, Phase::new(0.7, 0.1), Phase::new(1.9, 2.0));
        assert!((-1.0..=1.0).contains(&w));
        let p = drift(center, amp, t, Phase::new(0.3, 0.0), Phase::new(0.5, 1.0));
        assert!((p.x - 0.5).abs() <= 0.1 + 1e-12);
        assert!((p.y - 0.5).abs() <= 0.05 + 1e-12);
    }
}

#[test]
fn cycle_wraps_and_handles_degenerate_period() {
    assert!((cycle(2.5, 2.0) - 0.25).abs() < 1e-12);
    assert!((cycle(-0.5, 2.0) - 0.75).abs() < 1e-12);
    assert_eq!(cycle(3.0, 0.0), 0.0);
    assert_eq!(cycle(f64::NAN, 1.0), 0.0);
}

#[test]
fn scatter_is_deterministic_and_in_unit_range() {
    for i in 0..500 {
        let v = scatter(i, 0.3);
        assert!((0.0..1.0).contains(&v));
        assert_eq!(v, scatter(i, 0.3));
    }
    assert_ne!(scatter(1, 0.3), scatter(2, 0.3));
}
