use crate::catalog::meta::PriorityClass;
use crate::overlay::descriptor::OverlayDescriptor;

/// One positioned entry of the composite stack.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderLayer {
    /// Resolved stacking class.
    pub priority: PriorityClass,
    /// Base z-index of `priority`; entries sharing it stack in list order.
    pub z_index: i32,
    pub overlay: OverlayDescriptor,
}

/// Final overlay stack, back to front.
///
/// The core emits no pixels: a display layer iterates `layers` and paints each overlay as an
/// independently blended region over the filtered surface.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct RenderTree {
    pub layers: Vec<RenderLayer>,
}

impl RenderTree {
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Overlays in composite order.
    pub fn overlays(&self) -> impl Iterator<Item = &OverlayDescriptor> {
        self.layers.iter().map(|l| &l.overlay)
    }

    /// Condition ids in composite order.
    pub fn conditions(&self) -> impl Iterator<Item = &str> {
        self.overlays().map(|o| o.condition.as_str())
    }
}
