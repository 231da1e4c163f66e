use crate::catalog::condition::{ConditionCategory, ConditionKind};

/// How a condition reaches the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderKind {
    /// Whole-image filter fragment only.
    Filter,
    /// Overlay descriptor only.
    Overlay,
    /// Both a named filter preset and an overlay.
    Hybrid,
}

impl RenderKind {
    pub fn has_filter(self) -> bool {
        matches!(self, Self::Filter | Self::Hybrid)
    }

    pub fn has_overlay(self) -> bool {
        matches!(self, Self::Overlay | Self::Hybrid)
    }
}

/// Whether an overlay must be resampled every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motion {
    /// Depends on intensity only; cacheable until intensity changes.
    Static,
    /// Encodes motion; recomputed on every clock tick.
    Dynamic,
}

/// Compositing rule for an overlay.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
}

impl BlendMode {
    /// CSS `mix-blend-mode` keyword.
    pub fn css_keyword(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Overlay => "overlay",
        }
    }
}

/// Stacking class, back (`FieldLoss`) to front (`DoubleVision`).
///
/// The derived ordering is the stacking order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PriorityClass {
    FieldLoss,
    FocalLoss,
    Degradation,
    NoiseDistortion,
    Transient,
    DoubleVision,
}

impl PriorityClass {
    pub const ALL: [Self; 6] = [
        Self::FieldLoss,
        Self::FocalLoss,
        Self::Degradation,
        Self::NoiseDistortion,
        Self::Transient,
        Self::DoubleVision,
    ];

    /// Base z-index of the class; classes are spaced so hosts can interleave their own layers.
    pub fn z_index(self) -> i32 {
        (self as i32 + 1) * 10
    }
}

/// Static, read-only description of one catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ConditionMeta {
    pub kind: ConditionKind,
    /// Stable camelCase identifier used by effect documents.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ConditionCategory,
    pub render: RenderKind,
    pub motion: Motion,
    pub blend: BlendMode,
    pub priority: PriorityClass,
}

impl ConditionMeta {
    pub fn is_dynamic(&self) -> bool {
        self.motion == Motion::Dynamic
    }

    pub fn is_filter_based(&self) -> bool {
        self.render.has_filter()
    }

    pub fn has_overlay(&self) -> bool {
        self.render.has_overlay()
    }
}
