use crate::catalog::condition::ConditionKind;
use crate::catalog::meta::PriorityClass;
use crate::compose::tree::{RenderLayer, RenderTree};
use crate::overlay::descriptor::OverlayDescriptor;

/// Orders overlays into a [`RenderTree`].
///
/// Layers are grouped by [`PriorityClass`], back (field loss) to front (double vision). Within a
/// class the caller's order is kept. Blend modes are carried per layer and never merged.
#[derive(Clone, Copy, Debug)]
pub struct LayerCompositor {
    default_priority: PriorityClass,
}

impl LayerCompositor {
    pub fn new() -> Self {
        Self {
            default_priority: PriorityClass::Degradation,
        }
    }

    /// Class used for overlays that carry no priority and do not name an overlay condition.
    pub fn with_default_priority(default_priority: PriorityClass) -> Self {
        Self { default_priority }
    }

    #[tracing::instrument(level = "trace", skip_all, fields(overlays = overlays.len()))]
    pub fn composite(&self, overlays: Vec<OverlayDescriptor>) -> RenderTree {
        let mut layers: Vec<RenderLayer> = overlays
            .into_iter()
            .map(|overlay| {
                let priority = self.resolve_priority(&overlay);
                RenderLayer {
                    priority,
                    z_index: priority.z_index(),
                    overlay,
                }
            })
            .collect();
        // Stable: equal classes keep input order.
        layers.sort_by_key(|l| l.priority);
        RenderTree { layers }
    }

    /// Descriptor priority, else the catalog class of its condition, else the default.
    pub fn resolve_priority(&self, overlay: &OverlayDescriptor) -> PriorityClass {
        overlay
            .priority
            .or_else(|| {
                ConditionKind::from_id(&overlay.condition)
                    .map(ConditionKind::meta)
                    .filter(|m| m.has_overlay())
                    .map(|m| m.priority)
            })
            .unwrap_or(self.default_priority)
    }
}

impl Default for LayerCompositor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
