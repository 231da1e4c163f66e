//! Peripheral and hemifield loss.

use super::count;
use crate::animation::curve::Curve;
use crate::animation::phase::{Phase, scatter, wobble};
use crate::catalog::condition::ConditionKind;
use crate::foundation::core::{Point, Rgba, Vec2};
use crate::foundation::math::{MAX_OPACITY, clamp_unit};
use crate::overlay::descriptor::{AnimationName, AnimationSpec, OverlayDescriptor};
use crate::overlay::registry::{OverlayInput, OverlayRegistry};
use crate::overlay::shapes::{self, CENTER};
use std::f64::consts::TAU;

const VOID: Rgba = Rgba::BLACK;
const PIGMENT: Rgba = Rgba::rgb(35, 25, 20);

pub(super) fn register(reg: &mut OverlayRegistry) {
    reg.register(ConditionKind::HemianopiaLeft, hemianopia_left);
    reg.register(ConditionKind::HemianopiaRight, hemianopia_right);
    reg.register(ConditionKind::BitemporalHemianopia, bitemporal_hemianopia);
    reg.register(ConditionKind::QuadrantanopiaSuperior, quadrantanopia_superior);
    reg.register(ConditionKind::QuadrantanopiaInferior, quadrantanopia_inferior);
    reg.register(ConditionKind::TunnelVision, tunnel_vision);
    reg.register(ConditionKind::Glaucoma, glaucoma);
    reg.register(ConditionKind::RetinitisPigmentosa, retinitis_pigmentosa);
    reg.register(ConditionKind::RetinalDetachment, retinal_detachment);
}

fn hemianopia(input: &OverlayInput, angle_deg: f64) -> OverlayDescriptor {
    let i = input.intensity;
    let feather = Curve::Linear.map(i, 0.06, 0.015);
    OverlayDescriptor::for_condition(
        input.kind,
        Curve::Sqrt.map(i, 0.1, 0.97),
        vec![shapes::field_cut(angle_deg, 0.5, feather, VOID, MAX_OPACITY)],
    )
}

fn hemianopia_left(input: &OverlayInput) -> OverlayDescriptor {
    hemianopia(input, 90.0)
}

fn hemianopia_right(input: &OverlayInput) -> OverlayDescriptor {
    hemianopia(input, 270.0)
}

/// Both temporal (outer) fields lost.
fn bitemporal_hemianopia(input: &OverlayInput) -> OverlayDescriptor {
    let i = input.intensity;
    let edge = Curve::Linear.map(i, 0.2, 0.38);
    let feather = Curve::Linear.map(i, 0.06, 0.02);
    OverlayDescriptor::for_condition(
        input.kind,
        Curve::Sqrt.map(i, 0.1, 0.95),
        vec![
            shapes::field_cut(90.0, edge, feather, VOID, MAX_OPACITY),
            shapes::field_cut(270.0, edge, feather, VOID, MAX_OPACITY),
        ],
    )
}

fn quadrantanopia(input: &OverlayInput, from_deg: f64) -> OverlayDescriptor {
    let i = input.intensity;
    OverlayDescriptor::for_condition(
        input.kind,
        Curve::Sqrt.map(i, 0.1, 0.95),
        vec![shapes::quadrant(
            from_deg,
            Curve::Linear.map(i, 0.02, 0.008),
            VOID,
            MAX_OPACITY,
        )],
    )
}

/// Upper-left quarter of the field.
fn quadrantanopia_superior(input: &OverlayInput) -> OverlayDescriptor {
    quadrantanopia(input, 270.0)
}

/// Lower-left quarter of the field.
fn quadrantanopia_inferior(input: &OverlayInput) -> OverlayDescriptor {
    quadrantanopia(input, 180.0)
}

fn tunnel_vision(input: &OverlayInput) -> OverlayDescriptor {
    let i = input.intensity;
    OverlayDescriptor::for_condition(
        input.kind,
        Curve::Sqrt.map(i, 0.2, 0.97),
        vec![shapes::tunnel(
            Curve::Linear.map(i, 0.6, 0.08),
            0.12,
            VOID,
            MAX_OPACITY,
        )],
    )
}

/// Soft peripheral constriction plus arcuate defects above and below fixation.
fn glaucoma(input: &OverlayInput) -> OverlayDescriptor {
    let i = input.intensity;
    let arc = Vec2::new(Curve::Linear.map(i, 0.12, 0.3), Curve::Linear.map(i, 0.03, 0.07));
    let arc_alpha = Curve::Linear.map(i, 0.2, 0.75);
    OverlayDescriptor::for_condition(
        input.kind,
        Curve::Sqrt.map(i, 0.15, 0.92),
        vec![
            shapes::tunnel(Curve::Linear.map(i, 0.7, 0.22), 0.22, VOID, MAX_OPACITY),
            shapes::blob(Point::new(0.5, 0.32), arc, VOID, arc_alpha, 0.8),
            shapes::blob(Point::new(0.5, 0.68), arc, VOID, arc_alpha, 0.8),
        ],
    )
}

/// Narrow tunnel ringed by pigment clumps.
fn retinitis_pigmentosa(input: &OverlayInput) -> OverlayDescriptor {
    let i = input.intensity;
    let clear = Curve::Linear.map(i, 0.55, 0.06);
    let n = count(6, 10.0, i);
    let r = Curve::Linear.map(i, 0.015, 0.035);
    let alpha = Curve::Linear.map(i, 0.3, 0.85);

    let mut layers = Vec::with_capacity(n as usize + 1);
    layers.push(shapes::tunnel(clear, 0.1, VOID, MAX_OPACITY));
    for k in 0..n {
        let angle = TAU * f64::from(k) / f64::from(n) + 0.3 * scatter(k, 0.4);
        let dist = clear + 0.08 + 0.05 * scatter(k, 1.1);
        let c = Point::new(CENTER.x + dist * angle.cos(), CENTER.y + dist * angle.sin());
        layers.push(shapes::disc(c, r, PIGMENT, alpha, 0.6));
    }
    OverlayDescriptor::for_condition(input.kind, Curve::Sqrt.map(i, 0.2, 0.97), layers)
}

/// A curtain descending from above with an undulating edge.
fn retinal_detachment(input: &OverlayInput) -> OverlayDescriptor {
    let i = input.intensity;
    let t = input.time;
    let undulation = wobble(t, Phase::new(0.7, 0.0), Phase::new(1.9, 1.1));
    let edge = clamp_unit(Curve::Linear.map(i, 0.1, 0.62) + 0.03 * undulation);
    let billow_center = Point::new(0.5 + 0.12 * Phase::new(0.45, 0.3).sin(t), edge);
    let billow = Vec2::new(Curve::Linear.map(i, 0.12, 0.3), 0.05);

    OverlayDescriptor::for_condition(
        input.kind,
        Curve::Sqrt.map(i, 0.15, 0.95),
        vec![
            shapes::field_cut(180.0, edge, 0.05, VOID, MAX_OPACITY),
            shapes::blob(billow_center, billow, VOID, Curve::Linear.map(i, 0.2, 0.6), 0.7),
        ],
    )
    .with_animation(AnimationSpec {
        name: AnimationName::Sway,
        period_secs: 9.0,
        amplitude: 0.01,
    })
}
