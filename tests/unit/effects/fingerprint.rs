use super::*;

#[test]
fn effects_fingerprint_ignores_order_and_disabled_entries() {
    let a = vec![
        VisualEffect::new("scotoma", 0.3),
        VisualEffect::new("visualSnow", 0.8),
        VisualEffect::new("glare", 0.9).disabled(),
    ];
    let b = vec![
        VisualEffect::new("visualSnow", 0.8),
        VisualEffect::new("scotoma", 0.3),
    ];
    assert_eq!(fingerprint_effects(&a), fingerprint_effects(&b));
}

#[test]
fn effects_fingerprint_tracks_intensity() {
    let a = vec![VisualEffect::new("scotoma", 0.3)];
    let b = vec![VisualEffect::new("scotoma", 0.31)];
    assert_ne!(fingerprint_effects(&a), fingerprint_effects(&b));
}

#[test]
fn condition_fingerprint_separates_ids() {
    let i = Intensity::new(0.5);
    assert_ne!(
        fingerprint_condition("halos", i),
        fingerprint_condition("glare", i)
    );
    assert_eq!(
        fingerprint_condition("halos", i),
        fingerprint_condition("halos", Intensity::new(0.5))
    );
}

#[test]
fn length_prefix_prevents_string_aliasing() {
    let mut a = StableHasher::new();
    a.write_str("ab");
    a.write_str("c");
    let mut b = StableHasher::new();
    b.write_str("a");
    b.write_str("bc");
    assert_ne!(a.finish(), b.finish());
}

#[test]
fn display_is_32_hex_digits() {
    let f = fingerprint_effects(&[]);
    let s = f.to_string();
    assert_eq!(s.len(), 32);
    assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
}
