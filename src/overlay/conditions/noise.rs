//! Noise, floaters, and geometric distortion.

use super::count;
use crate::animation::curve::Curve;
use crate::animation::phase::{Phase, drift, scatter};
use crate::catalog::condition::ConditionKind;
use crate::filter::descriptor::FilterPrimitive;
use crate::foundation::core::{Point, Rgba, Vec2};
use crate::overlay::descriptor::{AnimationName, AnimationSpec, OverlayDescriptor};
use crate::overlay::registry::{OverlayInput, OverlayRegistry};
use crate::overlay::shapes::{self, CENTER};
use std::f64::consts::TAU;

/// Visual snow re-scatters this many times per second.
const SNOW_RATE: f64 = 12.0;
const GREY: Rgba = Rgba::rgb(170, 170, 170);
const STRAND: Rgba = Rgba::rgb(30, 30, 36);

pub(super) fn register(reg: &mut OverlayRegistry) {
    reg.register(ConditionKind::VisualSnow, visual_snow);
    reg.register(ConditionKind::Floaters, floaters);
    reg.register(ConditionKind::Metamorphopsia, metamorphopsia);
    reg.register(ConditionKind::Nystagmus, nystagmus);
}

/// Field of tiny flickering dots, re-scattered at a fixed rate.
fn visual_snow(input: &OverlayInput) -> OverlayDescriptor {
    let i = input.intensity;
    let salt = (input.time * SNOW_RATE).floor() * 0.618_034;
    let base_alpha = Curve::Linear.map(i, 0.3, 0.8);
    let base_r = Curve::Linear.map(i, 0.004, 0.009);
    let layers = (0..count(20, 60.0, i))
        .map(|k| {
            let c = Point::new(scatter(k, salt + 0.37), scatter(k, salt + 1.91));
            let r = base_r * (0.7 + 0.6 * scatter(k, salt + 2.6));
            let color = if k % 2 == 0 { Rgba::WHITE } else { GREY };
            let alpha = base_alpha * (0.6 + 0.4 * scatter(k, salt + 3.3));
            shapes::disc(c, r, color, alpha, 1.0)
        })
        .collect();
    OverlayDescriptor::for_condition(input.kind, Curve::Sqrt.map(i, 0.2, 0.8), layers)
}

/// Elongated specks drifting slowly across the view.
fn floaters(input: &OverlayInput) -> OverlayDescriptor {
    let i = input.intensity;
    let t = input.time;
    let base_r = Curve::Linear.map(i, 0.012, 0.03);
    let alpha = Curve::Linear.map(i, 0.25, 0.7);
    let layers = (0..count(3, 6.0, i))
        .map(|k| {
            let home = Point::new(0.2 + 0.6 * scatter(k, 1.3), 0.2 + 0.6 * scatter(k, 2.9));
            let c = drift(
                home,
                Vec2::new(0.08, 0.1),
                t,
                Phase::new(0.21, 0.0).seeded(k),
                Phase::new(0.17, 0.6).seeded(k),
            );
            let rx = base_r * (0.6 + 0.8 * scatter(k, 4.2));
            let ry = rx * (1.5 + 1.5 * scatter(k, 7.7));
            shapes::blob(c, Vec2::new(rx, ry), STRAND, alpha, 0.8)
        })
        .collect();
    OverlayDescriptor::for_condition(input.kind, Curve::Sqrt.map(i, 0.15, 0.85), layers)
        .with_animation(AnimationSpec {
            name: AnimationName::Sway,
            period_secs: 14.0,
            amplitude: 0.02,
        })
}

/// Concentric light/dark rings whose radii ripple, bending straight lines under overlay blend.
fn metamorphopsia(input: &OverlayInput) -> OverlayDescriptor {
    let i = input.intensity;
    let t = input.time;
    let alpha = Curve::Linear.map(i, 0.1, 0.45);
    let layers = (0..count(3, 3.0, i))
        .map(|k| {
            let ripple = 1.0 + 0.06 * Phase::new(0.8, 0.0).seeded(k).sin(t);
            let r = 0.08 * f64::from(k + 1) * ripple;
            let color = if k % 2 == 0 { Rgba::WHITE } else { Rgba::BLACK };
            shapes::ring(CENTER, r, 0.02, color, alpha)
        })
        .collect();
    OverlayDescriptor::for_condition(input.kind, Curve::Sqrt.map(i, 0.1, 0.7), layers)
        .with_filter(FilterPrimitive::Blur {
            radius_px: Curve::Linear.map(i, 0.0, 1.5),
        })
        .with_animation(AnimationSpec {
            name: AnimationName::Warp,
            period_secs: 5.0,
            amplitude: Curve::Linear.map(i, 0.01, 0.05),
        })
}

/// Rapid horizontal oscillation, rendered as a displaced ghost with motion blur.
fn nystagmus(input: &OverlayInput) -> OverlayDescriptor {
    let i = input.intensity;
    let hz = Curve::Linear.map(i, 2.0, 4.0);
    let amplitude = Curve::Linear.map(i, 0.004, 0.02);
    let dx = amplitude * (TAU * hz * input.time).sin();
    OverlayDescriptor::for_condition(
        input.kind,
        Curve::Sqrt.map(i, 0.2, 0.9),
        vec![shapes::ghost(Vec2::new(dx, 0.0), Curve::Linear.map(i, 0.2, 0.6))],
    )
    .with_filter(FilterPrimitive::Blur {
        radius_px: Curve::Linear.map(i, 0.3, 2.0),
    })
    .with_animation(AnimationSpec {
        name: AnimationName::OscillateX,
        period_secs: 1.0 / hz,
        amplitude,
    })
}
