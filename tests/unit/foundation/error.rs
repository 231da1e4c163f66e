use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        VisionError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        VisionError::unknown_condition("nope")
            .to_string()
            .contains("unknown condition: 'nope'")
    );
    assert!(
        VisionError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = VisionError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_convert() {
    let err: VisionError = serde_json::from_str::<u32>("not json").unwrap_err().into();
    assert!(matches!(err, VisionError::Serde(_)));
}
