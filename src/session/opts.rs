use crate::foundation::core::Surface;
use crate::foundation::error::{VisionError, VisionResult};

/// Options controlling a [`SimulationSession`](crate::SimulationSession).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionOpts {
    /// Target display surface; only used to resolve size-relative geometry.
    pub surface: Surface,
    /// Maximum dynamic-overlay recomputations per second. `None` recomputes on every frame.
    pub dynamic_update_hz: Option<f64>,
    /// Reuse static overlays until their `(condition, intensity)` changes.
    pub cache_static_overlays: bool,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            surface: Surface::default(),
            dynamic_update_hz: None,
            cache_static_overlays: true,
        }
    }
}

impl SessionOpts {
    pub fn validate(&self) -> VisionResult<()> {
        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(VisionError::validation(
                "surface width and height must be > 0",
            ));
        }
        if let Some(hz) = self.dynamic_update_hz
            && !(hz.is_finite() && hz > 0.0)
        {
            return Err(VisionError::validation(
                "dynamic_update_hz must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Parse and validate an options JSON document.
    pub fn from_json(s: &str) -> VisionResult<Self> {
        let opts: Self = serde_json::from_str(s)?;
        opts.validate()?;
        Ok(opts)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/opts.rs"]
mod tests;
