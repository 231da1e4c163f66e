//! Migraine auras and afterimages.

use super::count;
use crate::animation::curve::Curve;
use crate::animation::phase::{Phase, cycle};
use crate::catalog::condition::ConditionKind;
use crate::foundation::core::{Point, Rgba, Vec2};
use crate::foundation::math::lerp;
use crate::overlay::descriptor::{AnimationName, AnimationSpec, OverlayDescriptor};
use crate::overlay::registry::{OverlayInput, OverlayRegistry};
use crate::overlay::shapes::{self, CENTER};

/// Seconds for the aura front to expand across the field.
const AURA_PERIOD: f64 = 20.0;
const AMBER: Rgba = Rgba::rgb(255, 236, 140);
const SPARK_WARM: Rgba = Rgba::rgb(255, 240, 120);
const SPARK_COOL: Rgba = Rgba::rgb(120, 220, 255);

pub(super) fn register(reg: &mut OverlayRegistry) {
    reg.register(ConditionKind::VisualAura, visual_aura);
    reg.register(ConditionKind::VisualAuraLeft, visual_aura_left);
    reg.register(ConditionKind::VisualAuraRight, visual_aura_right);
    reg.register(ConditionKind::Palinopsia, palinopsia);
}

/// Expanding scintillating zig-zag arc.
///
/// `arc_deg` bounds the sparks angularly (0 points right, angles grow clockwise on screen).
fn aura(input: &OverlayInput, center: Point, arc_deg: (f64, f64)) -> OverlayDescriptor {
    let i = input.intensity;
    let t = input.time;
    let front = lerp(0.05, 0.45, cycle(t, AURA_PERIOD));
    let w = Curve::Linear.map(i, 0.015, 0.04);
    let a = Curve::Linear.map(i, 0.25, 0.75);
    let n = count(10, 14.0, i);

    let mut layers = Vec::with_capacity(n as usize + 1);
    layers.push(shapes::ring(center, front, w, AMBER, 0.5 * a));
    for k in 0..n {
        let theta = lerp(arc_deg.0, arc_deg.1, (f64::from(k) + 0.5) / f64::from(n)).to_radians();
        let zig = if k % 2 == 0 { w } else { -w };
        let c = Point::new(
            center.x + (front + zig) * theta.cos(),
            center.y + (front + zig) * theta.sin(),
        );
        let color = if k % 2 == 0 { SPARK_WARM } else { SPARK_COOL };
        let flicker = 0.6 + 0.4 * Phase::new(8.0, 0.0).seeded(k).unit(t);
        layers.push(shapes::disc(c, 0.9 * w, color, a * flicker, 0.8));
    }

    OverlayDescriptor::for_condition(input.kind, Curve::Sqrt.map(i, 0.15, 0.85), layers)
        .with_animation(AnimationSpec {
            name: AnimationName::Pulse,
            period_secs: AURA_PERIOD,
            amplitude: 0.3,
        })
}

fn visual_aura(input: &OverlayInput) -> OverlayDescriptor {
    aura(input, CENTER, (0.0, 360.0))
}

fn visual_aura_left(input: &OverlayInput) -> OverlayDescriptor {
    aura(input, Point::new(0.28, 0.5), (90.0, 270.0))
}

fn visual_aura_right(input: &OverlayInput) -> OverlayDescriptor {
    aura(input, Point::new(0.72, 0.5), (-90.0, 90.0))
}

/// Trail of fading afterimages along a slowly turning direction.
fn palinopsia(input: &OverlayInput) -> OverlayDescriptor {
    const TRAIL: u32 = 3;
    const STEP: f64 = 0.018;
    let i = input.intensity;
    let heading = Phase::new(0.25, 0.0);
    let dir = Vec2::new(heading.cos(input.time), heading.sin(input.time));
    let base = Curve::Linear.map(i, 0.15, 0.45);
    let layers = (1..=TRAIL)
        .map(|k| {
            let k = f64::from(k);
            shapes::ghost(dir * (k * STEP), base * 0.6_f64.powf(k - 1.0))
        })
        .collect();
    OverlayDescriptor::for_condition(input.kind, Curve::Sqrt.map(i, 0.15, 0.8), layers)
}
