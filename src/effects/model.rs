use crate::catalog::condition::ConditionKind;
use crate::catalog::meta::ConditionMeta;
use crate::catalog::table::CATALOG;
use crate::foundation::core::Intensity;
use crate::foundation::error::{VisionError, VisionResult};

/// One selectable condition instance, as owned by the selection UI.
///
/// The engine only reads snapshots of these; `name` and `description` are display metadata and
/// never influence rendering.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualEffect {
    /// Catalog id. Unknown ids are kept and rendered with the fallback overlay.
    pub id: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_intensity")]
    pub intensity: Intensity,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

fn default_intensity() -> Intensity {
    Intensity::new(0.5)
}

impl VisualEffect {
    /// Enabled effect for `id` at `intensity`, with catalog display metadata when known.
    pub fn new(id: impl Into<String>, intensity: f64) -> Self {
        let id = id.into();
        let (name, description) = match ConditionKind::from_id(&id) {
            Some(kind) => (
                kind.meta().name.to_owned(),
                kind.meta().description.to_owned(),
            ),
            None => (id.clone(), String::new()),
        };
        Self {
            id,
            enabled: true,
            intensity: Intensity::new(intensity),
            name,
            description,
        }
    }

    pub fn of(kind: ConditionKind, intensity: f64) -> Self {
        Self::new(kind.id(), intensity)
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn kind(&self) -> Option<ConditionKind> {
        ConditionKind::from_id(&self.id)
    }

    pub fn meta(&self) -> Option<&'static ConditionMeta> {
        self.kind().map(ConditionKind::meta)
    }
}

/// Initial effect list: one disabled entry per catalog condition at half intensity.
pub fn default_effects() -> Vec<VisualEffect> {
    CATALOG
        .iter()
        .map(|m| VisualEffect {
            id: m.id.to_owned(),
            enabled: false,
            intensity: default_intensity(),
            name: m.name.to_owned(),
            description: m.description.to_owned(),
        })
        .collect()
}

/// Parse an effects document (a JSON array of [`VisualEffect`]).
///
/// Intensities are clamped during deserialization; empty ids are rejected.
pub fn parse_effects_json(s: &str) -> VisionResult<Vec<VisualEffect>> {
    let effects: Vec<VisualEffect> = serde_json::from_str(s)?;
    validate_effects(&effects)?;
    Ok(effects)
}

pub fn validate_effects(effects: &[VisualEffect]) -> VisionResult<()> {
    for (i, e) in effects.iter().enumerate() {
        if e.id.trim().is_empty() {
            return Err(VisionError::validation(format!(
                "effect #{i} has an empty id"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/model.rs"]
mod tests;
