use crate::animation::curve::Curve;
use crate::animation::phase::{Phase, wobble};
use crate::catalog::condition::ConditionKind;
use crate::foundation::core::Vec2;
use crate::overlay::descriptor::{AnimationName, AnimationSpec, OverlayDescriptor};
use crate::overlay::registry::{OverlayInput, OverlayRegistry};
use crate::overlay::shapes;

pub(super) fn register(reg: &mut OverlayRegistry) {
    reg.register(ConditionKind::Diplopia, diplopia);
}

/// Second image offset down and to the right, separation growing with intensity.
fn diplopia(input: &OverlayInput) -> OverlayDescriptor {
    let i = input.intensity;
    let sep = Curve::Linear.map(i, 0.01, 0.08);
    let jitter = 0.1 * sep * wobble(input.time, Phase::new(0.5, 0.0), Phase::new(0.83, 1.7));
    OverlayDescriptor::for_condition(
        input.kind,
        Curve::Sqrt.map(i, 0.3, 0.9),
        vec![shapes::ghost(
            Vec2::new(sep + jitter, 0.3 * sep),
            Curve::Linear.map(i, 0.3, 0.6),
        )],
    )
    .with_animation(AnimationSpec {
        name: AnimationName::Sway,
        period_secs: 6.0,
        amplitude: 0.1 * sep,
    })
}
