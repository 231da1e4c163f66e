use super::*;

#[test]
fn standard_covers_exactly_the_overlay_capable_conditions() {
    let reg = OverlayRegistry::standard();
    for kind in ConditionKind::all() {
        assert_eq!(
            reg.contains(kind),
            kind.meta().has_overlay(),
            "{} registration mismatch",
            kind.id()
        );
    }
}

#[test]
fn empty_registry_has_no_entries() {
    assert_eq!(OverlayRegistry::empty().registered().count(), 0);
}

#[test]
fn fallback_darkens_in_proportion_to_intensity() {
    let low = fallback_overlay("mystery", Intensity::new(0.25));
    let high = fallback_overlay("mystery", Intensity::new(0.5));
    assert_eq!(low.condition, "mystery");
    assert_eq!(low.blend, BlendMode::Multiply);
    assert_eq!(low.priority, None);
    assert!(!low.layers.is_empty());
    assert!((high.opacity - 2.0 * low.opacity).abs() < 1e-12);
    assert_eq!(fallback_overlay("mystery", Intensity::ZERO).opacity, 0.0);
}

#[test]
fn register_replaces_previous_entry() {
    fn blank(input: &OverlayInput) -> OverlayDescriptor {
        OverlayDescriptor::for_condition(input.kind, 0.0, Vec::new())
    }
    let mut reg = OverlayRegistry::standard();
    reg.register(ConditionKind::Glare, blank);
    let f = reg.get(ConditionKind::Glare).unwrap();
    let d = f(&OverlayInput {
        kind: ConditionKind::Glare,
        intensity: Intensity::FULL,
        time: 0.0,
    });
    assert!(d.layers.is_empty());
}
