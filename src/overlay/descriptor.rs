use crate::catalog::condition::ConditionKind;
use crate::catalog::meta::{BlendMode, PriorityClass};
use crate::filter::descriptor::FilterPrimitive;
use crate::foundation::core::{Point, Rgba, Vec2};
use crate::foundation::math::{clamp_extent, clamp_opacity, clamp_unit};
use smallvec::SmallVec;

/// Gradient color stop. `offset` is a fraction of the gradient line (or turn, for conic).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ColorStop {
    pub color: Rgba,
    pub offset: f64,
}

impl ColorStop {
    pub fn new(color: Rgba, alpha: f64, offset: f64) -> Self {
        Self {
            color: color.with_alpha(alpha),
            offset,
        }
    }
}

pub type Stops = SmallVec<[ColorStop; 4]>;

/// One overlay layer. Geometry is surface-relative: points and radii are fractions of the
/// surface width (x) and height (y).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layer {
    /// Elliptical radial gradient; stop offsets are fractions of `radii`.
    Radial {
        center: Point,
        radii: Vec2,
        stops: Stops,
    },
    /// Linear gradient across the whole surface. `angle_deg` follows CSS: 0 points up, 90 right.
    Linear { angle_deg: f64, stops: Stops },
    /// Conic sweep around `center`, starting at `from_deg` (CSS convention, clockwise from up).
    Conic {
        center: Point,
        from_deg: f64,
        stops: Stops,
    },
    /// Displaced copy of the underlying image.
    Ghost { offset: Vec2, opacity: f64 },
}

impl Layer {
    pub fn radii(&self) -> Option<Vec2> {
        match self {
            Self::Radial { radii, .. } => Some(*radii),
            _ => None,
        }
    }

    pub fn center(&self) -> Option<Point> {
        match self {
            Self::Radial { center, .. } | Self::Conic { center, .. } => Some(*center),
            _ => None,
        }
    }

    pub fn stops(&self) -> &[ColorStop] {
        match self {
            Self::Radial { stops, .. } | Self::Linear { stops, .. } | Self::Conic { stops, .. } => {
                stops
            }
            Self::Ghost { .. } => &[],
        }
    }

    /// Largest alpha the layer paints.
    pub fn peak_alpha(&self) -> f64 {
        match self {
            Self::Ghost { opacity, .. } => *opacity,
            _ => self.stops().iter().map(|s| s.color.a).fold(0.0, f64::max),
        }
    }

    fn clamped(self) -> Self {
        fn clamp_stops(stops: Stops) -> Stops {
            stops
                .into_iter()
                .map(|s| ColorStop {
                    color: s.color.with_alpha(clamp_opacity(s.color.a)),
                    offset: clamp_unit(s.offset),
                })
                .collect()
        }

        match self {
            Self::Radial {
                center,
                radii,
                stops,
            } => Self::Radial {
                center,
                radii: Vec2::new(clamp_extent(radii.x), clamp_extent(radii.y)),
                stops: clamp_stops(stops),
            },
            Self::Linear { angle_deg, stops } => Self::Linear {
                angle_deg,
                stops: clamp_stops(stops),
            },
            Self::Conic {
                center,
                from_deg,
                stops,
            } => Self::Conic {
                center,
                from_deg,
                stops: clamp_stops(stops),
            },
            Self::Ghost { offset, opacity } => Self::Ghost {
                offset,
                opacity: clamp_opacity(opacity),
            },
        }
    }
}

/// Named periodic transform applied to the whole overlay by the display layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationName {
    /// Horizontal back-and-forth shift.
    OscillateX,
    /// Slow two-axis sway.
    Sway,
    /// Continuous rotation.
    Rotate,
    /// Opacity pulsing.
    Pulse,
    /// Rippling scale distortion.
    Warp,
}

impl AnimationName {
    pub const ALL: [Self; 5] = [
        Self::OscillateX,
        Self::Sway,
        Self::Rotate,
        Self::Pulse,
        Self::Warp,
    ];

    /// CSS `@keyframes` name.
    pub fn keyframes_name(self) -> &'static str {
        match self {
            Self::OscillateX => "visionsim-oscillate-x",
            Self::Sway => "visionsim-sway",
            Self::Rotate => "visionsim-rotate",
            Self::Pulse => "visionsim-pulse",
            Self::Warp => "visionsim-warp",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AnimationSpec {
    pub name: AnimationName,
    /// Seconds per cycle.
    pub period_secs: f64,
    /// Magnitude; surface-relative for translations, degrees for rotation, fraction otherwise.
    pub amplitude: f64,
}

/// Per-condition overlay: a back-to-front layer list plus compositing parameters.
///
/// A pure function of `(condition, intensity, time)`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OverlayDescriptor {
    /// Catalog id, or the unrecognized id for fallback overlays.
    pub condition: String,
    pub layers: Vec<Layer>,
    pub blend: BlendMode,
    /// Overall opacity, `[0, 0.99]`.
    pub opacity: f64,
    /// Stacking class; the compositor assigns one when absent.
    pub priority: Option<PriorityClass>,
    /// Local post-processing for this overlay only.
    pub filter: Option<FilterPrimitive>,
    pub animation: Option<AnimationSpec>,
    /// Whether the descriptor depends on time.
    pub dynamic: bool,
}

impl OverlayDescriptor {
    /// Descriptor carrying the catalog blend, priority, and motion of `kind`.
    pub fn for_condition(kind: ConditionKind, opacity: f64, layers: Vec<Layer>) -> Self {
        let meta = kind.meta();
        Self {
            condition: meta.id.to_owned(),
            layers,
            blend: meta.blend,
            opacity,
            priority: Some(meta.priority),
            filter: None,
            animation: None,
            dynamic: meta.is_dynamic(),
        }
    }

    pub fn with_filter(mut self, filter: FilterPrimitive) -> Self {
        self.filter = if filter.is_identity() {
            None
        } else {
            Some(filter)
        };
        self
    }

    pub fn with_animation(mut self, animation: AnimationSpec) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Largest alpha painted by any layer.
    pub fn peak_alpha(&self) -> f64 {
        self.layers
            .iter()
            .map(Layer::peak_alpha)
            .fold(0.0, f64::max)
    }

    /// Aggregate darkening/obscuring magnitude: `opacity x peak_alpha`.
    pub fn severity(&self) -> f64 {
        self.opacity * self.peak_alpha()
    }

    /// Enforce output bounds: opacities in `[0, 0.99]`, radii in the visible field, stop offsets
    /// in `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self {
            opacity: clamp_opacity(self.opacity),
            layers: self.layers.into_iter().map(Layer::clamped).collect(),
            filter: self.filter.map(|f| match f {
                FilterPrimitive::Blur { radius_px } => FilterPrimitive::Blur {
                    radius_px: radius_px.max(0.0),
                },
                other => other,
            }),
            ..self
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/descriptor.rs"]
mod tests;
