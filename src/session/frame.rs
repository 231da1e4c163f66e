use crate::compose::tree::RenderTree;
use crate::effects::fingerprint::{Fingerprint, StableHasher};
use crate::filter::descriptor::FilterDescriptor;
use crate::foundation::core::Surface;
use crate::overlay::descriptor::{ColorStop, Layer, OverlayDescriptor};
use std::fmt::Write as _;

/// Everything a display surface needs for one frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct RenderFrame {
    /// Sample time in seconds.
    pub time: f64,
    /// Whole-surface filter, applied once beneath the overlays.
    pub filter: FilterDescriptor,
    /// Overlay stack, back to front.
    pub tree: RenderTree,
}

impl RenderFrame {
    /// Fingerprint of the visual content. Sample time is excluded, so two frames that render the
    /// same pixels share a fingerprint and hosts can skip the repaint.
    pub fn fingerprint(&self) -> Fingerprint {
        let mut h = StableHasher::new();
        h.write_str(&self.filter.to_string());
        for (id, values) in self.filter.svg_color_matrices() {
            h.write_str(&id);
            h.write_str(&values);
        }
        h.write_u32(self.tree.layers.len() as u32);
        for layer in &self.tree.layers {
            h.write_u32(layer.z_index as u32);
            hash_overlay(&mut h, &layer.overlay);
        }
        h.finish()
    }

    /// CSS for the surface filter followed by one rule per overlay layer.
    pub fn to_css(&self, surface: Surface) -> String {
        let mut out = format!(".visionsim-surface {{\n  filter: {};\n}}\n", self.filter);
        out.push_str(&self.tree.to_css(surface));
        out
    }

    /// Inline SVG `<filter>` definitions backing the `url(#cvd-...)` references of the surface
    /// filter. Empty when no color matrix is active.
    pub fn svg_defs(&self) -> String {
        let matrices = self.filter.svg_color_matrices();
        if matrices.is_empty() {
            return String::new();
        }
        let mut out = String::from(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"0\" height=\"0\" aria-hidden=\"true\">",
        );
        for (id, values) in matrices {
            // Writing into a String cannot fail.
            let _ = write!(
                out,
                "<filter id=\"{id}\"><feColorMatrix type=\"matrix\" values=\"{values}\"/></filter>"
            );
        }
        out.push_str("</svg>");
        out
    }
}

fn hash_stops(h: &mut StableHasher, stops: &[ColorStop]) {
    h.write_u32(stops.len() as u32);
    for s in stops {
        h.write_bytes(&[s.color.r, s.color.g, s.color.b]);
        h.write_f64(s.color.a);
        h.write_f64(s.offset);
    }
}

fn hash_overlay(h: &mut StableHasher, o: &OverlayDescriptor) {
    h.write_str(&o.condition);
    h.write_str(o.blend.css_keyword());
    h.write_f64(o.opacity);
    h.write_u32(o.layers.len() as u32);
    for layer in &o.layers {
        match layer {
            Layer::Radial {
                center,
                radii,
                stops,
            } => {
                h.write_u8(0);
                h.write_f64(center.x);
                h.write_f64(center.y);
                h.write_f64(radii.x);
                h.write_f64(radii.y);
                hash_stops(h, stops);
            }
            Layer::Linear { angle_deg, stops } => {
                h.write_u8(1);
                h.write_f64(*angle_deg);
                hash_stops(h, stops);
            }
            Layer::Conic {
                center,
                from_deg,
                stops,
            } => {
                h.write_u8(2);
                h.write_f64(center.x);
                h.write_f64(center.y);
                h.write_f64(*from_deg);
                hash_stops(h, stops);
            }
            Layer::Ghost { offset, opacity } => {
                h.write_u8(3);
                h.write_f64(offset.x);
                h.write_f64(offset.y);
                h.write_f64(*opacity);
            }
        }
    }
    match &o.filter {
        Some(f) => h.write_str(&f.to_string()),
        None => h.write_u8(0),
    }
    match &o.animation {
        Some(a) => {
            h.write_str(a.name.keyframes_name());
            h.write_f64(a.period_secs);
            h.write_f64(a.amplitude);
        }
        None => h.write_u8(0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/frame.rs"]
mod tests;
