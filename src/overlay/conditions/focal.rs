//! Central and scattered focal loss.

use super::count;
use crate::animation::curve::Curve;
use crate::animation::phase::{Phase, cycle, drift, scatter};
use crate::catalog::condition::ConditionKind;
use crate::filter::descriptor::FilterPrimitive;
use crate::foundation::core::{Point, Rgba, Vec2};
use crate::foundation::math::MAX_OPACITY;
use crate::overlay::descriptor::{AnimationName, AnimationSpec, OverlayDescriptor};
use crate::overlay::registry::{OverlayInput, OverlayRegistry};
use crate::overlay::shapes::{self, CENTER};
use std::f64::consts::TAU;

const LESION: Rgba = Rgba::rgb(40, 32, 28);
const RIM: Rgba = Rgba::rgb(90, 80, 70);
const VOID: Rgba = Rgba::BLACK;
const HEMORRHAGE: Rgba = Rgba::rgb(70, 18, 14);

/// Seconds per scotoma grow/shrink cycle.
const SCOTOMA_PERIOD: f64 = 12.0;

pub(super) fn register(reg: &mut OverlayRegistry) {
    reg.register(ConditionKind::MacularDegeneration, macular_degeneration);
    reg.register(ConditionKind::Scotoma, scotoma);
    reg.register(ConditionKind::DiabeticRetinopathy, diabetic_retinopathy);
}

fn macular_degeneration(input: &OverlayInput) -> OverlayDescriptor {
    let i = input.intensity;
    let r = Curve::Linear.map(i, 0.08, 0.32);
    OverlayDescriptor::for_condition(
        input.kind,
        Curve::Sqrt.map(i, 0.2, 0.95),
        vec![
            shapes::disc(CENTER, r, LESION, MAX_OPACITY, 0.55),
            shapes::ring(CENTER, r * 1.35, r * 0.25, RIM, Curve::Linear.map(i, 0.1, 0.4)),
        ],
    )
    .with_filter(FilterPrimitive::Blur {
        radius_px: Curve::Linear.map(i, 0.0, 2.0),
    })
}

/// Drifting blind spot that slowly grows and shrinks.
///
/// The first layer is the dense core; its radius scales with intensity and a cyclic growth
/// factor in `[0.85, 1.15]`.
fn scotoma(input: &OverlayInput) -> OverlayDescriptor {
    let i = input.intensity;
    let t = input.time;
    let growth = 0.85 + 0.3 * (0.5 - 0.5 * (TAU * cycle(t, SCOTOMA_PERIOD)).cos());
    let r = Curve::Linear.map(i, 0.06, 0.3) * growth;
    let c = drift(
        CENTER,
        Vec2::new(0.06, 0.04),
        t,
        Phase::new(0.37, 0.0),
        Phase::new(0.29, 1.3),
    );
    let orbit = 0.2 * t;
    let satellite = Point::new(c.x + 1.2 * r * orbit.cos(), c.y + 1.2 * r * orbit.sin());
    let penumbra_alpha =
        Curve::Linear.map(i, 0.15, 0.45) * (0.8 + 0.2 * Phase::new(0.9, 0.4).unit(t));

    OverlayDescriptor::for_condition(
        input.kind,
        Curve::Sqrt.map(i, 0.25, 0.95) * (0.92 + 0.08 * Phase::new(0.6, 2.1).unit(t)),
        vec![
            shapes::disc(c, r, VOID, MAX_OPACITY, 0.35),
            shapes::disc(c, r * 1.6, VOID, penumbra_alpha, 1.0),
            shapes::disc(satellite, r * 0.4, VOID, Curve::Linear.map(i, 0.1, 0.5), 0.6),
        ],
    )
    .with_animation(AnimationSpec {
        name: AnimationName::Pulse,
        period_secs: SCOTOMA_PERIOD,
        amplitude: 0.15,
    })
}

/// Scattered dot-and-blot hemorrhages.
fn diabetic_retinopathy(input: &OverlayInput) -> OverlayDescriptor {
    let i = input.intensity;
    let n = count(4, 10.0, i);
    let base_r = Curve::Linear.map(i, 0.02, 0.065);
    let alpha = Curve::Linear.map(i, 0.35, 0.9);
    let layers = (0..n)
        .map(|k| {
            let c = Point::new(0.12 + 0.76 * scatter(k, 2.3), 0.12 + 0.76 * scatter(k, 5.9));
            let r = base_r * (0.7 + 0.6 * scatter(k, 8.1));
            shapes::disc(c, r, HEMORRHAGE, alpha, 0.5)
        })
        .collect();
    OverlayDescriptor::for_condition(input.kind, Curve::Sqrt.map(i, 0.2, 0.9), layers)
}
