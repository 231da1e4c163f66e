//! Light scatter and opacities in the optical media.

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

const CLOUD: Rgba = Rgba::rgb(236, 226, 196);
const GLOW: Rgba = Rgba::rgb(255, 248, 225);
const BLOOD: Rgba = Rgba::rgb(110, 12, 10);
const WARM: Rgba = Rgba::rgb(255, 240, 200);
const COOL: Rgba = Rgba::rgb(200, 220, 255);

/// Assumed position of the dominant light source.
const LIGHT: Point = Point::new(0.5, 0.42);

pub(super) fn register(reg: &mut OverlayRegistry) {
    reg.register(ConditionKind::Cataracts, cataracts);
    reg.register(ConditionKind::VitreousHemorrhage, vitreous_hemorrhage);
    reg.register(ConditionKind::Glare, glare);
    reg.register(ConditionKind::Halos, halos);
    reg.register(ConditionKind::Starbursting, starbursting);
    reg.register(ConditionKind::Photophobia, photophobia);
}

fn cataracts(input: &OverlayInput) -> OverlayDescriptor {
    let i = input.intensity;
    OverlayDescriptor::for_condition(
        input.kind,
        Curve::Sqrt.map(i, 0.1, 0.85),
        vec![
            shapes::haze(
                CENTER,
                Vec2::new(1.0, 1.0),
                CLOUD,
                Curve::Linear.map(i, 0.25, 0.75),
                Curve::Linear.map(i, 0.15, 0.5),
            ),
            shapes::disc(
                CENTER,
                Curve::Linear.map(i, 0.2, 0.45),
                GLOW,
                Curve::Linear.map(i, 0.1, 0.35),
                1.0,
            ),
        ],
    )
    .with_filter(FilterPrimitive::Blur {
        radius_px: Curve::Linear.map(i, 0.0, 4.0),
    })
}

/// Red wash settling toward the bottom with slowly drifting clots.
fn vitreous_hemorrhage(input: &OverlayInput) -> OverlayDescriptor {
    let i = input.intensity;
    let t = input.time;
    let n = count(3, 5.0, i);
    let base_r = Curve::Linear.map(i, 0.05, 0.16);
    let alpha = Curve::Linear.map(i, 0.3, 0.85);

    let mut layers = Vec::with_capacity(n as usize + 1);
    layers.push(shapes::wash(
        180.0,
        BLOOD,
        Curve::Linear.map(i, 0.02, 0.12),
        Curve::Linear.map(i, 0.05, 0.35),
    ));
    for k in 0..n {
        let home = Point::new(0.15 + 0.7 * scatter(k, 3.7), 0.25 + 0.6 * scatter(k, 6.1));
        let c = drift(
            home,
            Vec2::new(0.04, 0.03),
            t,
            Phase::new(0.15, 0.0).seeded(k),
            Phase::new(0.11, 0.8).seeded(k),
        );
        let rx = base_r * (0.7 + 0.6 * scatter(k, 9.2));
        let ry = rx * (0.6 + 0.5 * scatter(k, 4.4));
        layers.push(shapes::blob(c, Vec2::new(rx, ry), BLOOD, alpha, 0.7));
    }
    OverlayDescriptor::for_condition(input.kind, Curve::Sqrt.map(i, 0.2, 0.9), layers)
}

fn glare(input: &OverlayInput) -> OverlayDescriptor {
    let i = input.intensity;
    let source = Point::new(0.5, 0.3);
    let reach = Curve::Linear.map(i, 0.3, 0.8);
    OverlayDescriptor::for_condition(
        input.kind,
        Curve::Sqrt.map(i, 0.1, 0.85),
        vec![
            shapes::haze(
                source,
                Vec2::new(reach, reach),
                Rgba::WHITE,
                Curve::Linear.map(i, 0.2, 0.7),
                0.0,
            ),
            shapes::rays(source, 12, 0.0, 0.18, Rgba::WHITE, Curve::Linear.map(i, 0.05, 0.3)),
        ],
    )
}

/// Warm inner and cool outer ring around the light source.
fn halos(input: &OverlayInput) -> OverlayDescriptor {
    let i = input.intensity;
    let r = Curve::Linear.map(i, 0.08, 0.2);
    let w = Curve::Linear.map(i, 0.012, 0.035);
    let a = Curve::Linear.map(i, 0.2, 0.65);
    OverlayDescriptor::for_condition(
        input.kind,
        Curve::Sqrt.map(i, 0.1, 0.8),
        vec![
            shapes::disc(LIGHT, 0.5 * r, WARM, 0.8 * a, 1.0),
            shapes::ring(LIGHT, r, w, WARM, a),
            shapes::ring(LIGHT, 1.6 * r, 1.3 * w, COOL, 0.6 * a),
        ],
    )
}

/// Slowly rotating rays with a shimmering brightness.
fn starbursting(input: &OverlayInput) -> OverlayDescriptor {
    let i = input.intensity;
    let t = input.time;
    let rotation = 6.0 * t + 3.0 * Phase::new(0.8, 0.0).sin(t);
    let shimmer = 0.9 + 0.1 * Phase::new(2.3, 0.5).unit(t);
    OverlayDescriptor::for_condition(
        input.kind,
        Curve::Sqrt.map(i, 0.1, 0.85) * shimmer,
        vec![
            shapes::disc(
                LIGHT,
                Curve::Linear.map(i, 0.05, 0.12),
                Rgba::WHITE,
                Curve::Linear.map(i, 0.1, 0.5),
                1.0,
            ),
            shapes::rays(
                LIGHT,
                count(8, 8.0, i),
                rotation,
                Curve::Linear.map(i, 0.15, 0.3),
                Rgba::WHITE,
                Curve::Linear.map(i, 0.15, 0.6),
            ),
        ],
    )
    .with_animation(AnimationSpec {
        name: AnimationName::Rotate,
        period_secs: 60.0,
        amplitude: 360.0,
    })
}

/// Pulsing brightness wash.
fn photophobia(input: &OverlayInput) -> OverlayDescriptor {
    const PULSE: Phase = Phase::new(1.6, 0.0);
    let i = input.intensity;
    let pulse = 0.8 + 0.2 * PULSE.unit(input.time);
    OverlayDescriptor::for_condition(
        input.kind,
        Curve::Sqrt.map(i, 0.1, 0.8) * pulse,
        vec![shapes::haze(
            CENTER,
            Vec2::new(1.0, 1.0),
            Rgba::WHITE,
            Curve::Linear.map(i, 0.2, 0.75),
            Curve::Linear.map(i, 0.1, 0.4),
        )],
    )
    .with_animation(AnimationSpec {
        name: AnimationName::Pulse,
        period_secs: TAU / PULSE.freq,
        amplitude: 0.2,
    })
}
