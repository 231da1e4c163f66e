use super::*;

const CVD: [ConditionKind; 8] = [
    ConditionKind::Protanopia,
    ConditionKind::Deuteranopia,
    ConditionKind::Tritanopia,
    ConditionKind::Protanomaly,
    ConditionKind::Deuteranomaly,
    ConditionKind::Tritanomaly,
    ConditionKind::Achromatopsia,
    ConditionKind::Achromatomaly,
];

#[test]
fn full_severity_rows_preserve_white() {
    for kind in CVD {
        let m = ColorMatrix::for_condition(kind, Intensity::FULL).unwrap();
        let white = m.apply([1.0, 1.0, 1.0]);
        for c in white {
            assert!((c - 1.0).abs() < 1e-9, "{kind:?} maps white to {white:?}");
        }
    }
}

#[test]
fn zero_intensity_is_identity() {
    for kind in CVD {
        let m = ColorMatrix::for_condition(kind, Intensity::ZERO).unwrap();
        assert!(m.is_identity(), "{kind:?}");
    }
}

#[test]
fn half_intensity_is_midpoint_blend() {
    let m = ColorMatrix::for_condition(ConditionKind::Protanopia, Intensity::new(0.5)).unwrap();
    assert!((m.rows[0][0] - (1.0 + 0.567) / 2.0).abs() < 1e-12);
    assert!((m.rows[0][1] - 0.433 / 2.0).abs() < 1e-12);
    assert!(m.svg_id().starts_with("cvd-protanopia-50-"));
}

#[test]
fn non_color_conditions_have_no_matrix() {
    assert!(ColorMatrix::for_condition(ConditionKind::Glaucoma, Intensity::FULL).is_none());
}

#[test]
fn svg_values_has_twenty_entries() {
    let m = ColorMatrix::for_condition(ConditionKind::Tritanopia, Intensity::FULL).unwrap();
    assert_eq!(m.svg_values().split_whitespace().count(), 20);
}

#[test]
fn ids_that_round_alike_stay_distinct() {
    let kind = ConditionKind::Protanopia;
    let a = ColorMatrix::for_condition(kind, Intensity::new(0.501)).unwrap();
    let b = ColorMatrix::for_condition(kind, Intensity::new(0.509)).unwrap();
    assert_ne!(a.svg_values(), b.svg_values());
    assert_ne!(a.svg_id(), b.svg_id());

    let again = ColorMatrix::for_condition(kind, Intensity::new(0.501)).unwrap();
    assert_eq!(a.svg_id(), again.svg_id());
}
