use super::*;
use crate::catalog::meta::BlendMode;
use crate::foundation::core::Intensity;
use crate::overlay::generator::OverlayGenerator;
use crate::overlay::registry::fallback_overlay;

fn overlay(id: &str) -> OverlayDescriptor {
    OverlayGenerator::standard().generate(id, Intensity::new(0.5), 1.0)
}

#[test]
fn orders_by_priority_class() {
    let tree = LayerCompositor::new().composite(vec![
        overlay("diplopia"),
        overlay("visualSnow"),
        overlay("visualAura"),
        overlay("cataracts"),
        overlay("scotoma"),
        overlay("tunnelVision"),
    ]);
    let ids: Vec<&str> = tree.conditions().collect();
    assert_eq!(
        ids,
        [
            "tunnelVision",
            "scotoma",
            "cataracts",
            "visualSnow",
            "visualAura",
            "diplopia"
        ]
    );
    assert!(tree.layers.windows(2).all(|w| w[0].z_index <= w[1].z_index));
}

#[test]
fn keeps_caller_order_within_a_class() {
    let tree = LayerCompositor::new().composite(vec![
        overlay("floaters"),
        overlay("hemianopiaRight"),
        overlay("visualSnow"),
        overlay("hemianopiaLeft"),
        overlay("metamorphopsia"),
    ]);
    let ids: Vec<&str> = tree.conditions().collect();
    assert_eq!(
        ids,
        [
            "hemianopiaRight",
            "hemianopiaLeft",
            "floaters",
            "visualSnow",
            "metamorphopsia"
        ]
    );
}

#[test]
fn unset_priority_resolves_from_catalog_then_default() {
    let c = LayerCompositor::new();
    let mut known = overlay("floaters");
    known.priority = None;
    assert_eq!(c.resolve_priority(&known), PriorityClass::NoiseDistortion);

    let unknown = fallback_overlay("mystery", Intensity::new(0.5));
    assert_eq!(c.resolve_priority(&unknown), PriorityClass::Degradation);

    let custom = LayerCompositor::with_default_priority(PriorityClass::FieldLoss);
    assert_eq!(custom.resolve_priority(&unknown), PriorityClass::FieldLoss);
}

#[test]
fn blend_modes_stay_per_layer() {
    let tree = LayerCompositor::new().composite(vec![overlay("glare"), overlay("glaucoma")]);
    let blends: Vec<BlendMode> = tree.overlays().map(|o| o.blend).collect();
    assert_eq!(blends, [BlendMode::Multiply, BlendMode::Screen]);
}

#[test]
fn empty_input_gives_empty_tree() {
    let tree = LayerCompositor::new().composite(Vec::new());
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
}
