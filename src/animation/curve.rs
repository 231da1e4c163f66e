use crate::foundation::core::Intensity;

/// Response curves used to map condition intensity onto a visual parameter.
///
/// Every curve is monotonic non-decreasing on `[0, 1]` with `apply(0) == 0` and `apply(1) == 1`,
/// so mapping through any of them preserves the intensity ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    /// Straight proportional response.
    Linear,
    /// Fast onset, saturating response.
    Sqrt,
    /// Slow onset.
    Quadratic,
    /// Very slow onset, used for effects that should only appear near full severity.
    Cubic,
    /// Hermite ease-in/out.
    Smooth,
}

impl Curve {
    /// Apply the curve to normalized `t`; input is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            Self::Linear => t,
            Self::Sqrt => t.sqrt(),
            Self::Quadratic => t * t,
            Self::Cubic => t * t * t,
            Self::Smooth => t * t * (3.0 - 2.0 * t),
        }
    }

    /// Map `intensity` through the curve onto `[lo, hi]`.
    pub fn map(self, intensity: Intensity, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.apply(intensity.get())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
