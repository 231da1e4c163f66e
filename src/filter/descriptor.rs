use crate::catalog::condition::ConditionKind;
use crate::filter::color_matrix::ColorMatrix;
use smallvec::SmallVec;
use std::fmt::{self, Write as _};

/// One whole-image filter primitive, in CSS filter-function terms.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterPrimitive {
    Blur { radius_px: f64 },
    Contrast { percent: f64 },
    Brightness { percent: f64 },
    Saturate { percent: f64 },
    HueRotate { deg: f64 },
    Sepia { percent: f64 },
    ColorMatrix(ColorMatrix),
}

impl FilterPrimitive {
    /// `true` when the primitive leaves every pixel unchanged.
    pub fn is_identity(&self) -> bool {
        const EPS: f64 = 1e-9;
        match self {
            Self::Blur { radius_px } => *radius_px <= EPS,
            Self::Contrast { percent }
            | Self::Brightness { percent }
            | Self::Saturate { percent } => (percent - 100.0).abs() <= EPS,
            Self::HueRotate { deg } => deg.abs() <= EPS,
            Self::Sepia { percent } => *percent <= EPS,
            Self::ColorMatrix(m) => m.is_identity(),
        }
    }
}

impl fmt::Display for FilterPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blur { radius_px } => write!(f, "blur({}px)", Num(*radius_px)),
            Self::Contrast { percent } => write!(f, "contrast({}%)", Num(*percent)),
            Self::Brightness { percent } => write!(f, "brightness({}%)", Num(*percent)),
            Self::Saturate { percent } => write!(f, "saturate({}%)", Num(*percent)),
            Self::HueRotate { deg } => write!(f, "hue-rotate({}deg)", Num(*deg)),
            Self::Sepia { percent } => write!(f, "sepia({}%)", Num(*percent)),
            Self::ColorMatrix(m) => write!(f, "url(#{})", m.svg_id()),
        }
    }
}

/// Producer family a fragment came from. Fragment order in a descriptor follows producer
/// registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(tag = "family", content = "condition", rename_all = "snake_case")]
pub enum FragmentSource {
    CompleteBlindness,
    ColorVision,
    RefractiveBlur,
    Cataract,
    Preset(ConditionKind),
}

/// Contribution of one producer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FilterFragment {
    pub source: FragmentSource,
    pub primitives: SmallVec<[FilterPrimitive; 4]>,
}

impl FilterFragment {
    /// Build a fragment, dropping identity primitives. Returns `None` if nothing remains.
    pub fn new(
        source: FragmentSource,
        primitives: impl IntoIterator<Item = FilterPrimitive>,
    ) -> Option<Self> {
        let primitives: SmallVec<[FilterPrimitive; 4]> = primitives
            .into_iter()
            .filter(|p| !p.is_identity())
            .collect();
        if primitives.is_empty() {
            None
        } else {
            Some(Self { source, primitives })
        }
    }
}

/// Combined whole-image filter, applied once to the display surface.
///
/// Displays as a CSS `filter` value; an empty descriptor displays as `none`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct FilterDescriptor {
    pub fragments: Vec<FilterFragment>,
}

impl FilterDescriptor {
    pub fn is_neutral(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn primitives(&self) -> impl Iterator<Item = &FilterPrimitive> {
        self.fragments.iter().flat_map(|f| f.primitives.iter())
    }

    /// `(element id, feColorMatrix values)` for every color matrix referenced by `url(#...)`.
    pub fn svg_color_matrices(&self) -> Vec<(String, String)> {
        self.primitives()
            .filter_map(|p| match p {
                FilterPrimitive::ColorMatrix(m) => Some((m.svg_id(), m.svg_values())),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for FilterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_neutral() {
            return f.write_str("none");
        }
        let mut first = true;
        for p in self.primitives() {
            if !first {
                f.write_char(' ')?;
            }
            first = false;
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

/// Number formatting for CSS output: at most three decimals, no trailing zeros.
pub(crate) struct Num(pub(crate) f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = if self.0.is_finite() { self.0 } else { 0.0 };
        let s = format!("{v:.3}");
        let s = s.trim_end_matches('0').trim_end_matches('.');
        if s == "-0" || s.is_empty() {
            f.write_str("0")
        } else {
            f.write_str(s)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/descriptor.rs"]
mod tests;
