use super::*;
use crate::compose::compositor::LayerCompositor;
use crate::effects::model::VisualEffect;
use crate::filter::descriptor::FilterPrimitive;
use crate::filter::generator::FilterGenerator;
use crate::foundation::core::Intensity;
use crate::overlay::generator::OverlayGenerator;

fn frame(filter_effects: &[VisualEffect], overlay_ids: &[&str], time: f64) -> RenderFrame {
    let g = OverlayGenerator::standard();
    RenderFrame {
        time,
        filter: FilterGenerator::standard().generate(filter_effects),
        tree: LayerCompositor::new().composite(
            overlay_ids
                .iter()
                .map(|id| g.generate(id, Intensity::new(0.5), time))
                .collect(),
        ),
    }
}

#[test]
fn fingerprint_ignores_sample_time_for_static_content() {
    let a = frame(&[], &["glaucoma"], 0.0);
    let b = frame(&[], &["glaucoma"], 9.0);
    assert_ne!(a.time, b.time);
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn fingerprint_tracks_dynamic_geometry() {
    let a = frame(&[], &["floaters"], 0.0);
    let b = frame(&[], &["floaters"], 2.0);
    assert_ne!(a.fingerprint(), b.fingerprint());
}

#[test]
fn fingerprint_tracks_the_filter() {
    let a = frame(&[VisualEffect::new("myopia", 0.5)], &[], 0.0);
    let b = frame(&[VisualEffect::new("myopia", 0.6)], &[], 0.0);
    assert_ne!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.fingerprint(), frame(&[VisualEffect::new("myopia", 0.5)], &[], 3.0).fingerprint());
}

#[test]
fn css_starts_with_surface_filter() {
    let f = frame(&[VisualEffect::new("myopia", 0.5)], &["glare"], 0.0);
    let css = f.to_css(Surface::default());
    assert!(css.starts_with(".visionsim-surface {\n  filter: blur(3px);\n}\n"));
    assert!(css.contains(".visionsim-layer-0 {"));
}

#[test]
fn svg_defs_back_color_matrix_references() {
    assert_eq!(frame(&[], &[], 0.0).svg_defs(), "");
    let f = frame(&[VisualEffect::new("deuteranopia", 1.0)], &[], 0.0);
    let id = match f.filter.primitives().next() {
        Some(FilterPrimitive::ColorMatrix(m)) => m.svg_id(),
        other => panic!("expected a color matrix, got {other:?}"),
    };
    let defs = f.svg_defs();
    assert!(defs.contains(&format!("<filter id=\"{id}\">")));
    assert!(defs.contains("feColorMatrix type=\"matrix\""));
    assert!(f.to_css(Surface::default()).contains(&format!("url(#{id})")));
}
