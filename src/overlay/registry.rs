use crate::animation::curve::Curve;
use crate::catalog::condition::ConditionKind;
use crate::catalog::meta::BlendMode;
use crate::foundation::core::{Intensity, Rgba};
use crate::foundation::math::MAX_OPACITY;
use crate::overlay::conditions;
use crate::overlay::descriptor::OverlayDescriptor;
use crate::overlay::shapes;

/// Arguments every overlay generator receives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayInput {
    pub kind: ConditionKind,
    pub intensity: Intensity,
    /// Seconds since the clock started; always finite.
    pub time: f64,
}

/// Per-condition overlay generator.
pub(crate) type OverlayFn = fn(&OverlayInput) -> OverlayDescriptor;

/// Dispatch table from condition kind to overlay generator.
///
/// Conditions without an entry (and ids outside the catalog) resolve to [`fallback_overlay`].
pub struct OverlayRegistry {
    table: [Option<OverlayFn>; ConditionKind::COUNT],
}

impl OverlayRegistry {
    pub fn empty() -> Self {
        Self {
            table: [None; ConditionKind::COUNT],
        }
    }

    /// Generators for every overlay-capable catalog condition.
    pub fn standard() -> Self {
        let mut reg = Self::empty();
        conditions::register_all(&mut reg);
        reg
    }

    /// Install `f` for `kind`, replacing any previous entry.
    pub(crate) fn register(&mut self, kind: ConditionKind, f: OverlayFn) {
        self.table[kind as usize] = Some(f);
    }

    pub(crate) fn get(&self, kind: ConditionKind) -> Option<OverlayFn> {
        self.table[kind as usize]
    }

    pub fn contains(&self, kind: ConditionKind) -> bool {
        self.get(kind).is_some()
    }

    /// Registered kinds, in catalog order.
    pub fn registered(&self) -> impl Iterator<Item = ConditionKind> + '_ {
        ConditionKind::all().filter(|k| self.contains(*k))
    }
}

impl Default for OverlayRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Generic overlay for ids without a dedicated generator: uniform multiply darkening whose
/// opacity is proportional to intensity. No priority is set; the compositor assigns the default.
pub fn fallback_overlay(id: &str, intensity: Intensity) -> OverlayDescriptor {
    OverlayDescriptor {
        condition: id.to_owned(),
        layers: vec![shapes::wash(0.0, Rgba::BLACK, MAX_OPACITY, MAX_OPACITY)],
        blend: BlendMode::Multiply,
        opacity: Curve::Linear.map(intensity, 0.0, 0.6),
        priority: None,
        filter: None,
        animation: None,
        dynamic: false,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/registry.rs"]
mod tests;
