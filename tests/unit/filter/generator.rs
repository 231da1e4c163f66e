use super::*;

fn gen_for(effects: &[VisualEffect]) -> FilterDescriptor {
    FilterGenerator::standard().generate(effects)
}

#[test]
fn empty_input_is_neutral() {
    assert!(gen_for(&[]).is_neutral());
}

#[test]
fn disabled_and_unknown_effects_contribute_nothing() {
    let d = gen_for(&[
        VisualEffect::new("protanopia", 1.0).disabled(),
        VisualEffect::new("notACondition", 1.0),
        VisualEffect::new("hemianopiaLeft", 1.0),
    ]);
    assert!(d.is_neutral());
}

#[test]
fn protanopia_half_blends_matrix() {
    let d = gen_for(&[VisualEffect::new("protanopia", 0.5)]);
    assert_eq!(d.fragments.len(), 1);
    assert_eq!(d.fragments[0].source, FragmentSource::ColorVision);
    let FilterPrimitive::ColorMatrix(m) = &d.fragments[0].primitives[0] else {
        panic!("expected a color matrix");
    };
    assert_eq!(m.condition, ConditionKind::Protanopia);
    assert!((m.amount - 0.5).abs() < 1e-12);
}

#[test]
fn blindness_overrides_everything() {
    let d = gen_for(&[
        VisualEffect::new("protanopia", 0.8),
        VisualEffect::new("myopia", 0.8),
        VisualEffect::new("completeBlindness", 0.1),
        VisualEffect::new("cataracts", 0.8),
    ]);
    assert_eq!(d.fragments.len(), 1);
    assert_eq!(d.fragments[0].source, FragmentSource::CompleteBlindness);
    assert_eq!(
        d.fragments[0].primitives.as_slice(),
        &[FilterPrimitive::Brightness { percent: 0.0 }]
    );
    assert_eq!(d.to_string(), "brightness(0%)");
}

#[test]
fn disabled_blindness_does_not_override() {
    let d = gen_for(&[
        VisualEffect::new("completeBlindness", 1.0).disabled(),
        VisualEffect::new("myopia", 0.5),
    ]);
    assert_eq!(d.to_string(), "blur(3px)");
}

#[test]
fn vitreous_hemorrhage_suppresses_cataract_fragment() {
    let with_both = gen_for(&[
        VisualEffect::new("cataracts", 0.7),
        VisualEffect::new("vitreousHemorrhage", 0.4),
    ]);
    let sources: Vec<FragmentSource> = with_both.fragments.iter().map(|f| f.source).collect();
    assert_eq!(
        sources,
        [FragmentSource::Preset(ConditionKind::VitreousHemorrhage)]
    );

    let cataract_only = gen_for(&[VisualEffect::new("cataracts", 0.7)]);
    assert_eq!(cataract_only.fragments[0].source, FragmentSource::Cataract);
}

#[test]
fn fragments_follow_registration_order_not_input_order() {
    let d = gen_for(&[
        VisualEffect::new("photophobia", 0.5),
        VisualEffect::new("glaucoma", 0.5),
        VisualEffect::new("myopia", 0.5),
        VisualEffect::new("deuteranopia", 0.5),
    ]);
    let sources: Vec<FragmentSource> = d.fragments.iter().map(|f| f.source).collect();
    assert_eq!(
        sources,
        [
            FragmentSource::ColorVision,
            FragmentSource::RefractiveBlur,
            FragmentSource::Preset(ConditionKind::Glaucoma),
            FragmentSource::Preset(ConditionKind::Photophobia),
        ]
    );
}

#[test]
fn refractive_blurs_combine_in_quadrature() {
    // myopia 0.5 -> 3px, astigmatism 1.0 -> 3px => sqrt(18)
    let d = gen_for(&[
        VisualEffect::new("myopia", 0.5),
        VisualEffect::new("astigmatism", 1.0),
    ]);
    let FilterPrimitive::Blur { radius_px } = d.fragments[0].primitives[0] else {
        panic!("expected blur");
    };
    assert!((radius_px - 18f64.sqrt()).abs() < 1e-9);
}

#[test]
fn zero_intensity_presets_are_empty() {
    let d = gen_for(&[
        VisualEffect::new("glaucoma", 0.0),
        VisualEffect::new("myopia", 0.0),
        VisualEffect::new("tritanopia", 0.0),
    ]);
    assert!(d.is_neutral());
}

#[test]
fn multiple_color_deficiencies_stack_in_catalog_order() {
    let d = gen_for(&[
        VisualEffect::new("tritanopia", 0.5),
        VisualEffect::new("protanopia", 0.5),
    ]);
    let ids: Vec<String> = d.svg_color_matrices().into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids[0].starts_with("cvd-protanopia-50-"), "{ids:?}");
    assert!(ids[1].starts_with("cvd-tritanopia-50-"), "{ids:?}");
}

#[test]
fn first_duplicate_entry_wins() {
    let d = gen_for(&[
        VisualEffect::new("myopia", 0.5),
        VisualEffect::new("myopia", 1.0),
    ]);
    assert_eq!(d.to_string(), "blur(3px)");
}

#[test]
fn standard_order_is_documented_sequence() {
    let g = FilterGenerator::standard();
    let order: Vec<FragmentSource> = g.order().collect();
    assert_eq!(order[0], FragmentSource::ColorVision);
    assert_eq!(order[1], FragmentSource::RefractiveBlur);
    assert_eq!(order[2], FragmentSource::Cataract);
    assert_eq!(order.len(), 8);
}
