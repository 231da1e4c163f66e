use crate::foundation::error::{VisionError, VisionResult};

pub use kurbo::{Point, Vec2};

/// Pixel dimensions of the display surface the overlays are laid over.
///
/// Overlay geometry is expressed in surface-relative units (`0..1` on each axis); a surface is
/// only needed when resolving that geometry to pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Surface {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Surface {
    /// Create a validated, non-empty surface.
    pub fn new(width: u32, height: u32) -> VisionResult<Self> {
        if width == 0 || height == 0 {
            return Err(VisionError::validation(
                "surface width and height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Width divided by height.
    pub fn aspect(self) -> f64 {
        f64::from(self.width) / f64::from(self.height.max(1))
    }

    /// Resolve a surface-relative point into pixels.
    pub fn to_px(self, p: Point) -> Point {
        Point::new(p.x * f64::from(self.width), p.y * f64::from(self.height))
    }

    /// Resolve a surface-relative extent into pixels.
    pub fn extent_px(self, v: Vec2) -> Vec2 {
        Vec2::new(v.x * f64::from(self.width), v.y * f64::from(self.height))
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Condition severity in `[0, 1]`.
///
/// Construction always clamps, so generator math never sees an out-of-range or NaN value.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize)]
#[serde(transparent)]
pub struct Intensity(f64);

impl Intensity {
    /// No effect.
    pub const ZERO: Self = Self(0.0);
    /// Full severity.
    pub const FULL: Self = Self(1.0);

    /// Clamp `v` into `[0, 1]`; non-finite input maps to zero.
    pub fn new(v: f64) -> Self {
        if v.is_finite() {
            // `+ 0.0` folds -0.0 into 0.0 so equal intensities have equal bits.
            Self(v.clamp(0.0, 1.0) + 0.0)
        } else {
            Self(0.0)
        }
    }

    /// Raw value in `[0, 1]`.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Affine map onto `[lo, hi]`.
    pub fn lerp(self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.0
    }

    /// Bit pattern, used for cache keys and fingerprints.
    pub fn to_bits(self) -> u64 {
        self.0.to_bits()
    }
}

impl<'de> serde::Deserialize<'de> for Intensity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

impl From<f64> for Intensity {
    fn from(v: f64) -> Self {
        Self::new(v)
    }
}

/// Straight-alpha color. Channels are sRGB bytes, alpha is a fraction.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgb(0, 0, 0).with_alpha(0.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with alpha replaced.
    pub const fn with_alpha(self, a: f64) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
