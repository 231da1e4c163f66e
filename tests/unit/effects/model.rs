use super::*;

#[test]
fn new_fills_catalog_metadata() {
    let e = VisualEffect::new("glaucoma", 0.3);
    assert!(e.enabled);
    assert_eq!(e.name, "Glaucoma");
    assert!(!e.description.is_empty());
    assert_eq!(e.kind(), Some(ConditionKind::Glaucoma));
}

#[test]
fn unknown_ids_are_kept() {
    let e = VisualEffect::new("mysteryBlur", 2.0);
    assert_eq!(e.kind(), None);
    assert_eq!(e.intensity, Intensity::FULL);
    assert_eq!(e.name, "mysteryBlur");
}

#[test]
fn default_effects_cover_catalog_disabled() {
    let all = default_effects();
    assert_eq!(all.len(), ConditionKind::COUNT);
    assert!(all.iter().all(|e| !e.enabled));
    assert!(all.iter().all(|e| e.intensity.get() == 0.5));
}

#[test]
fn parse_clamps_and_defaults() {
    let effects = parse_effects_json(
        r#"[
            {"id": "protanopia", "enabled": true, "intensity": 1.5},
            {"id": "scotoma"}
        ]"#,
    )
    .unwrap();
    assert_eq!(effects[0].intensity, Intensity::FULL);
    assert!(!effects[1].enabled);
    assert_eq!(effects[1].intensity.get(), 0.5);
}

#[test]
fn parse_rejects_empty_ids_and_bad_json() {
    assert!(matches!(
        parse_effects_json(r#"[{"id": "  "}]"#),
        Err(VisionError::Validation(_))
    ));
    assert!(matches!(parse_effects_json("{"), Err(VisionError::Serde(_))));
}
