use crate::animation::curve::Curve;
use crate::catalog::condition::{ConditionCategory, ConditionKind};
use crate::effects::model::VisualEffect;
use crate::filter::color_matrix::ColorMatrix;
use crate::filter::descriptor::{FilterDescriptor, FilterFragment, FilterPrimitive, FragmentSource};
use crate::foundation::core::Intensity;
use crate::foundation::math::quadrature_sum;

/// Enabled, catalog-known conditions of one snapshot, keyed by kind.
///
/// When a condition appears more than once, the first enabled entry wins.
pub(crate) struct ActiveConditions {
    by_kind: [Option<Intensity>; ConditionKind::COUNT],
}

impl ActiveConditions {
    pub(crate) fn from_effects(effects: &[VisualEffect]) -> Self {
        let mut by_kind = [None; ConditionKind::COUNT];
        for e in effects.iter().filter(|e| e.enabled) {
            if let Some(kind) = e.kind() {
                let slot = &mut by_kind[kind as usize];
                if slot.is_none() {
                    *slot = Some(e.intensity);
                }
            }
        }
        Self { by_kind }
    }

    pub(crate) fn get(&self, kind: ConditionKind) -> Option<Intensity> {
        self.by_kind[kind as usize]
    }

    pub(crate) fn contains(&self, kind: ConditionKind) -> bool {
        self.get(kind).is_some()
    }

    /// Enabled members of `category`, in catalog order.
    pub(crate) fn in_category(
        &self,
        category: ConditionCategory,
    ) -> impl Iterator<Item = (ConditionKind, Intensity)> + '_ {
        ConditionKind::all()
            .filter(move |k| k.meta().category == category)
            .filter_map(|k| self.get(k).map(|i| (k, i)))
    }
}

/// A fragment producer. Receives the whole snapshot and returns `None` when its condition family
/// is absent.
pub(crate) type FilterProducer = fn(&ActiveConditions) -> Option<FilterFragment>;

/// Explicit suppression rule: when `when_enabled` is active, `suppressed` is skipped entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExclusionRule {
    pub suppressed: FragmentSource,
    pub when_enabled: ConditionKind,
}

/// Cataract yellowing and vitreous-hemorrhage red tint produce conflicting color casts.
pub const DEFAULT_EXCLUSIONS: [ExclusionRule; 1] = [ExclusionRule {
    suppressed: FragmentSource::Cataract,
    when_enabled: ConditionKind::VitreousHemorrhage,
}];

/// Combines per-condition filter fragments into one [`FilterDescriptor`].
///
/// Producers run in registration order and their fragments are concatenated in that order:
/// color vision, refractive blur, cataract, then the named per-condition presets. Complete
/// blindness overrides everything with a single zero-brightness fragment.
pub struct FilterGenerator {
    producers: Vec<(FragmentSource, FilterProducer)>,
    exclusions: Vec<ExclusionRule>,
}

impl FilterGenerator {
    /// The standard producer table.
    pub fn standard() -> Self {
        let producers: Vec<(FragmentSource, FilterProducer)> = vec![
            (FragmentSource::ColorVision, color_vision),
            (FragmentSource::RefractiveBlur, refractive_blur),
            (FragmentSource::Cataract, cataract),
            (
                FragmentSource::Preset(ConditionKind::Glaucoma),
                glaucoma_preset,
            ),
            (
                FragmentSource::Preset(ConditionKind::DiabeticRetinopathy),
                diabetic_retinopathy_preset,
            ),
            (
                FragmentSource::Preset(ConditionKind::RetinitisPigmentosa),
                retinitis_pigmentosa_preset,
            ),
            (
                FragmentSource::Preset(ConditionKind::VitreousHemorrhage),
                vitreous_hemorrhage_preset,
            ),
            (
                FragmentSource::Preset(ConditionKind::Photophobia),
                photophobia_preset,
            ),
        ];
        Self {
            producers,
            exclusions: DEFAULT_EXCLUSIONS.to_vec(),
        }
    }

    /// Registration order of the producers.
    pub fn order(&self) -> impl Iterator<Item = FragmentSource> + '_ {
        self.producers.iter().map(|(s, _)| *s)
    }

    #[tracing::instrument(level = "trace", skip_all, fields(effects = effects.len()))]
    pub fn generate(&self, effects: &[VisualEffect]) -> FilterDescriptor {
        let active = ActiveConditions::from_effects(effects);
        self.generate_active(&active)
    }

    pub(crate) fn generate_active(&self, active: &ActiveConditions) -> FilterDescriptor {
        if active.contains(ConditionKind::CompleteBlindness) {
            return FilterDescriptor {
                fragments: vec![blindness_fragment()],
            };
        }

        let mut fragments = Vec::new();
        for (source, produce) in &self.producers {
            if self.is_suppressed(*source, active) {
                continue;
            }
            if let Some(fragment) = produce(active) {
                fragments.push(fragment);
            }
        }
        FilterDescriptor { fragments }
    }

    fn is_suppressed(&self, source: FragmentSource, active: &ActiveConditions) -> bool {
        self.exclusions
            .iter()
            .any(|r| r.suppressed == source && active.contains(r.when_enabled))
    }
}

impl Default for FilterGenerator {
    fn default() -> Self {
        Self::standard()
    }
}

fn blindness_fragment() -> FilterFragment {
    FilterFragment {
        source: FragmentSource::CompleteBlindness,
        primitives: smallvec::smallvec![FilterPrimitive::Brightness { percent: 0.0 }],
    }
}

fn color_vision(active: &ActiveConditions) -> Option<FilterFragment> {
    FilterFragment::new(
        FragmentSource::ColorVision,
        active
            .in_category(ConditionCategory::ColorVision)
            .filter_map(|(k, i)| ColorMatrix::for_condition(k, i))
            .map(FilterPrimitive::ColorMatrix),
    )
}

/// Maximum blur per refractive condition, in px.
const REFRACTIVE_MAX_BLUR: [(ConditionKind, f64); 4] = [
    (ConditionKind::Myopia, 6.0),
    (ConditionKind::Hyperopia, 4.0),
    (ConditionKind::Astigmatism, 3.0),
    (ConditionKind::Presbyopia, 3.5),
];

fn refractive_blur(active: &ActiveConditions) -> Option<FilterFragment> {
    let radii = REFRACTIVE_MAX_BLUR
        .iter()
        .filter_map(|(k, max)| active.get(*k).map(|i| Curve::Linear.map(i, 0.0, *max)));
    let radius_px = quadrature_sum(radii);
    let hyperopia_contrast = active
        .get(ConditionKind::Hyperopia)
        .map_or(100.0, |i| Curve::Linear.map(i, 100.0, 90.0));
    FilterFragment::new(
        FragmentSource::RefractiveBlur,
        [
            FilterPrimitive::Blur { radius_px },
            FilterPrimitive::Contrast {
                percent: hyperopia_contrast,
            },
        ],
    )
}

fn cataract(active: &ActiveConditions) -> Option<FilterFragment> {
    let i = active.get(ConditionKind::Cataracts)?;
    FilterFragment::new(
        FragmentSource::Cataract,
        [
            FilterPrimitive::Blur {
                radius_px: Curve::Sqrt.map(i, 0.0, 3.0),
            },
            FilterPrimitive::Sepia {
                percent: Curve::Linear.map(i, 0.0, 60.0),
            },
            FilterPrimitive::Contrast {
                percent: Curve::Linear.map(i, 100.0, 70.0),
            },
            FilterPrimitive::Brightness {
                percent: Curve::Linear.map(i, 100.0, 110.0),
            },
        ],
    )
}

fn glaucoma_preset(active: &ActiveConditions) -> Option<FilterFragment> {
    let i = active.get(ConditionKind::Glaucoma)?;
    FilterFragment::new(
        FragmentSource::Preset(ConditionKind::Glaucoma),
        [FilterPrimitive::Contrast {
            percent: Curve::Linear.map(i, 100.0, 75.0),
        }],
    )
}

fn diabetic_retinopathy_preset(active: &ActiveConditions) -> Option<FilterFragment> {
    let i = active.get(ConditionKind::DiabeticRetinopathy)?;
    FilterFragment::new(
        FragmentSource::Preset(ConditionKind::DiabeticRetinopathy),
        [
            FilterPrimitive::Saturate {
                percent: Curve::Linear.map(i, 100.0, 60.0),
            },
            FilterPrimitive::Contrast {
                percent: Curve::Linear.map(i, 100.0, 90.0),
            },
        ],
    )
}

fn retinitis_pigmentosa_preset(active: &ActiveConditions) -> Option<FilterFragment> {
    let i = active.get(ConditionKind::RetinitisPigmentosa)?;
    FilterFragment::new(
        FragmentSource::Preset(ConditionKind::RetinitisPigmentosa),
        [
            FilterPrimitive::Brightness {
                percent: Curve::Quadratic.map(i, 100.0, 65.0),
            },
            FilterPrimitive::Contrast {
                percent: Curve::Linear.map(i, 100.0, 85.0),
            },
        ],
    )
}

fn vitreous_hemorrhage_preset(active: &ActiveConditions) -> Option<FilterFragment> {
    let i = active.get(ConditionKind::VitreousHemorrhage)?;
    FilterFragment::new(
        FragmentSource::Preset(ConditionKind::VitreousHemorrhage),
        [
            FilterPrimitive::Sepia {
                percent: Curve::Sqrt.map(i, 0.0, 70.0),
            },
            FilterPrimitive::HueRotate {
                deg: Curve::Linear.map(i, 0.0, -40.0),
            },
            FilterPrimitive::Saturate {
                percent: Curve::Linear.map(i, 100.0, 250.0),
            },
            FilterPrimitive::Brightness {
                percent: Curve::Linear.map(i, 100.0, 80.0),
            },
        ],
    )
}

fn photophobia_preset(active: &ActiveConditions) -> Option<FilterFragment> {
    let i = active.get(ConditionKind::Photophobia)?;
    FilterFragment::new(
        FragmentSource::Preset(ConditionKind::Photophobia),
        [
            FilterPrimitive::Brightness {
                percent: Curve::Sqrt.map(i, 100.0, 160.0),
            },
            FilterPrimitive::Contrast {
                percent: Curve::Linear.map(i, 100.0, 80.0),
            },
        ],
    )
}

#[cfg(test)]
#[path = "../../tests/unit/filter/generator.rs"]
mod tests;
