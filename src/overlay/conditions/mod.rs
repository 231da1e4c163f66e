//! Overlay generators grouped by visual family.
//!
//! Severity (`opacity x peak alpha`) of every generator is non-decreasing in intensity at a fixed
//! time: time only enters through positive multiplicative factors and geometry.

mod double;
mod field;
mod focal;
mod media;
mod noise;
mod transient;

use crate::overlay::registry::OverlayRegistry;

pub(crate) fn register_all(reg: &mut OverlayRegistry) {
    field::register(reg);
    focal::register(reg);
    media::register(reg);
    noise::register(reg);
    transient::register(reg);
    double::register(reg);
}

/// Integer count growing from `base` by up to `extra` with intensity.
fn count(base: u32, extra: f64, intensity: crate::foundation::core::Intensity) -> u32 {
    base + (extra * intensity.get()).round() as u32
}
