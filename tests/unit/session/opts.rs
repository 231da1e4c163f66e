use super::*;

#[test]
fn defaults_match_documented_values() {
    let opts = SessionOpts::default();
    assert_eq!(opts.surface, Surface::default());
    assert_eq!(opts.dynamic_update_hz, None);
    assert!(opts.cache_static_overlays);
    assert!(opts.validate().is_ok());
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let opts = SessionOpts::from_json(r#"{"dynamic_update_hz": 10.0}"#).unwrap();
    assert_eq!(opts.dynamic_update_hz, Some(10.0));
    assert_eq!(opts.surface, Surface::default());
    assert!(opts.cache_static_overlays);
}

#[test]
fn rejects_bad_update_rates() {
    for hz in [0.0, -5.0, f64::INFINITY, f64::NAN] {
        let opts = SessionOpts {
            dynamic_update_hz: Some(hz),
            ..SessionOpts::default()
        };
        let err = opts.validate().unwrap_err();
        assert!(matches!(err, VisionError::Validation(_)), "{hz}");
    }
}

#[test]
fn rejects_empty_surface() {
    let err = SessionOpts::from_json(r#"{"surface": {"width": 0, "height": 720}}"#).unwrap_err();
    assert!(err.to_string().starts_with("validation error:"));
}

#[test]
fn unknown_fields_and_bad_json_are_serde_errors() {
    assert!(matches!(
        SessionOpts::from_json(r#"{"fps": 30}"#),
        Err(VisionError::Serde(_))
    ));
    assert!(matches!(
        SessionOpts::from_json("{"),
        Err(VisionError::Serde(_))
    ));
}
