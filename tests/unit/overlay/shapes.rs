use super::*;

#[test]
fn field_cut_is_opaque_before_edge_and_clear_after() {
    let layer = field_cut(90.0, 0.5, 0.05, Rgba::BLACK, 0.9);
    let Layer::Linear { angle_deg, stops } = &layer else {
        panic!("expected linear layer");
    };
    assert_eq!(*angle_deg, 90.0);
    assert_eq!(stops[0].color.a, 0.9);
    assert!((stops[1].offset - 0.45).abs() < 1e-12);
    assert!((stops[2].offset - 0.55).abs() < 1e-12);
    assert_eq!(stops.last().unwrap().color.a, 0.0);
}

#[test]
fn tunnel_center_is_transparent() {
    let layer = tunnel(0.3, 0.1, Rgba::BLACK, 0.99);
    let stops = layer.stops();
    assert_eq!(stops[0].color.a, 0.0);
    assert_eq!(stops[1].offset, 0.3);
    assert!((stops[2].offset - 0.4).abs() < 1e-12);
    assert_eq!(layer.peak_alpha(), 0.99);
}

#[test]
fn rays_emit_three_stops_per_ray_within_a_turn() {
    let layer = rays(CENTER, 8, 725.0, 0.2, Rgba::WHITE, 0.5);
    let Layer::Conic { from_deg, stops, .. } = &layer else {
        panic!("expected conic layer");
    };
    assert!((from_deg - 5.0).abs() < 1e-9);
    assert_eq!(stops.len(), 24);
    assert!(stops.iter().all(|s| (0.0..=1.0).contains(&s.offset)));
    assert!(stops.windows(2).all(|w| w[0].offset <= w[1].offset));
}

#[test]
fn ring_peaks_at_its_radius() {
    let layer = ring(CENTER, 0.2, 0.05, Rgba::WHITE, 0.6);
    let radii = layer.radii().unwrap();
    assert!((radii.x - 0.25).abs() < 1e-12);
    let stops = layer.stops();
    assert!((stops[1].offset - 0.8).abs() < 1e-12);
    assert_eq!(stops[1].color.a, 0.6);
}

#[test]
fn quadrant_covers_a_quarter_turn() {
    let layer = quadrant(270.0, 0.01, Rgba::BLACK, 0.9);
    let stops = layer.stops();
    assert!((stops[1].offset - 0.24).abs() < 1e-12);
    assert!((stops[2].offset - 0.26).abs() < 1e-12);
    assert_eq!(stops[2].color.a, 0.0);
}
