use crate::catalog::condition::ConditionKind;
use crate::foundation::core::Intensity;
use crate::foundation::math::finite_time;
use crate::overlay::descriptor::OverlayDescriptor;
use crate::overlay::registry::{OverlayInput, OverlayRegistry, fallback_overlay};

/// Produces bounded overlay descriptors for conditions at a given intensity and time.
///
/// Output is a pure function of `(id, intensity, time)`: identical inputs yield identical
/// descriptors. Every opacity is clamped to `[0, 0.99]` and every radius to the visible field,
/// whatever the per-condition math produced.
pub struct OverlayGenerator {
    registry: OverlayRegistry,
}

impl OverlayGenerator {
    pub fn standard() -> Self {
        Self::with_registry(OverlayRegistry::standard())
    }

    pub fn with_registry(registry: OverlayRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &OverlayRegistry {
        &self.registry
    }

    /// Overlay for a catalog id. Unrecognized ids get the generic fallback overlay.
    #[tracing::instrument(level = "trace", skip(self, intensity))]
    pub fn generate(&self, id: &str, intensity: Intensity, time: f64) -> OverlayDescriptor {
        match ConditionKind::from_id(id) {
            Some(kind) => self.generate_kind(kind, intensity, time),
            None => fallback_overlay(id, intensity).clamped(),
        }
    }

    pub fn generate_kind(
        &self,
        kind: ConditionKind,
        intensity: Intensity,
        time: f64,
    ) -> OverlayDescriptor {
        let input = OverlayInput {
            kind,
            intensity,
            time: finite_time(time),
        };
        let descriptor = match self.registry.get(kind) {
            Some(f) => f(&input),
            None => fallback_overlay(kind.id(), intensity),
        };
        descriptor.clamped()
    }
}

impl Default for OverlayGenerator {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/generator.rs"]
mod tests;
