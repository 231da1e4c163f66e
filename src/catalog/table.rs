use crate::catalog::condition::{ConditionCategory as Cat, ConditionKind as K};
use crate::catalog::meta::{
    BlendMode as B, ConditionMeta, Motion::Dynamic, Motion::Static, PriorityClass as P,
    RenderKind::Filter, RenderKind::Hybrid, RenderKind::Overlay,
};

// Rows must stay in `ConditionKind` declaration order; `ConditionKind::meta` indexes by
// discriminant.
#[rustfmt::skip]
pub(crate) static CATALOG: [ConditionMeta; 40] = [
    // Color vision. Filter-only, so blend and priority are placeholders.
    row(K::Protanopia, "protanopia", "Protanopia",
        "Absent long-wavelength (red) cones; reds appear dark and merge with greens.",
        Cat::ColorVision, Filter, Static, B::Normal, P::Degradation),
    row(K::Deuteranopia, "deuteranopia", "Deuteranopia",
        "Absent medium-wavelength (green) cones; red and green hues are confused.",
        Cat::ColorVision, Filter, Static, B::Normal, P::Degradation),
    row(K::Tritanopia, "tritanopia", "Tritanopia",
        "Absent short-wavelength (blue) cones; blue/green and yellow/violet are confused.",
        Cat::ColorVision, Filter, Static, B::Normal, P::Degradation),
    row(K::Protanomaly, "protanomaly", "Protanomaly",
        "Shifted red cone sensitivity; a milder form of protanopia.",
        Cat::ColorVision, Filter, Static, B::Normal, P::Degradation),
    row(K::Deuteranomaly, "deuteranomaly", "Deuteranomaly",
        "Shifted green cone sensitivity; the most common color-vision deficiency.",
        Cat::ColorVision, Filter, Static, B::Normal, P::Degradation),
    row(K::Tritanomaly, "tritanomaly", "Tritanomaly",
        "Shifted blue cone sensitivity.",
        Cat::ColorVision, Filter, Static, B::Normal, P::Degradation),
    row(K::Achromatopsia, "achromatopsia", "Achromatopsia",
        "Complete absence of color perception; the world is seen in shades of gray.",
        Cat::ColorVision, Filter, Static, B::Normal, P::Degradation),
    row(K::Achromatomaly, "achromatomaly", "Achromatomaly",
        "Strongly reduced color perception.",
        Cat::ColorVision, Filter, Static, B::Normal, P::Degradation),
    // Refractive.
    row(K::Myopia, "myopia", "Myopia",
        "Nearsightedness; distant objects are out of focus.",
        Cat::Refractive, Filter, Static, B::Normal, P::Degradation),
    row(K::Hyperopia, "hyperopia", "Hyperopia",
        "Farsightedness; near objects are out of focus and contrast drops.",
        Cat::Refractive, Filter, Static, B::Normal, P::Degradation),
    row(K::Astigmatism, "astigmatism", "Astigmatism",
        "Irregular corneal curvature blurs vision at every distance.",
        Cat::Refractive, Filter, Static, B::Normal, P::Degradation),
    row(K::Presbyopia, "presbyopia", "Presbyopia",
        "Age-related loss of accommodation.",
        Cat::Refractive, Filter, Static, B::Normal, P::Degradation),
    // Optical media.
    row(K::Cataracts, "cataracts", "Cataracts",
        "Clouding of the lens: blur, yellowing, and a milky haze.",
        Cat::OpticalMedia, Hybrid, Static, B::Screen, P::Degradation),
    row(K::VitreousHemorrhage, "vitreousHemorrhage", "Vitreous Hemorrhage",
        "Blood in the vitreous casts a red tint and drifting dark clots.",
        Cat::OpticalMedia, Hybrid, Dynamic, B::Multiply, P::Degradation),
    row(K::Glare, "glare", "Glare",
        "Scattered light veils the scene around bright sources.",
        Cat::OpticalMedia, Overlay, Static, B::Screen, P::Degradation),
    row(K::Halos, "halos", "Halos",
        "Bright rings surround light sources.",
        Cat::OpticalMedia, Overlay, Static, B::Screen, P::Degradation),
    row(K::Starbursting, "starbursting", "Starbursting",
        "Radiating streaks of light around bright points.",
        Cat::OpticalMedia, Overlay, Dynamic, B::Screen, P::Degradation),
    row(K::Photophobia, "photophobia", "Photophobia",
        "Light sensitivity; brightness becomes overwhelming and pulses.",
        Cat::OpticalMedia, Hybrid, Dynamic, B::Screen, P::Degradation),
    // Visual field.
    row(K::HemianopiaLeft, "hemianopiaLeft", "Left Hemianopia",
        "Loss of the left half of the visual field.",
        Cat::VisualField, Overlay, Static, B::Multiply, P::FieldLoss),
    row(K::HemianopiaRight, "hemianopiaRight", "Right Hemianopia",
        "Loss of the right half of the visual field.",
        Cat::VisualField, Overlay, Static, B::Multiply, P::FieldLoss),
    row(K::BitemporalHemianopia, "bitemporalHemianopia", "Bitemporal Hemianopia",
        "Loss of both outer halves of the visual field.",
        Cat::VisualField, Overlay, Static, B::Multiply, P::FieldLoss),
    row(K::QuadrantanopiaSuperior, "quadrantanopiaSuperior", "Superior Quadrantanopia",
        "Loss of the upper-left quadrant of the visual field.",
        Cat::VisualField, Overlay, Static, B::Multiply, P::FieldLoss),
    row(K::QuadrantanopiaInferior, "quadrantanopiaInferior", "Inferior Quadrantanopia",
        "Loss of the lower-left quadrant of the visual field.",
        Cat::VisualField, Overlay, Static, B::Multiply, P::FieldLoss),
    row(K::TunnelVision, "tunnelVision", "Tunnel Vision",
        "Peripheral field constricts toward a small central window.",
        Cat::VisualField, Overlay, Static, B::Multiply, P::FieldLoss),
    row(K::Glaucoma, "glaucoma", "Glaucoma",
        "Optic nerve damage: arcuate defects, peripheral constriction, reduced contrast.",
        Cat::VisualField, Hybrid, Static, B::Multiply, P::FieldLoss),
    row(K::RetinitisPigmentosa, "retinitisPigmentosa", "Retinitis Pigmentosa",
        "Progressive rod loss: night blindness and a narrowing ring of vision.",
        Cat::VisualField, Hybrid, Static, B::Multiply, P::FieldLoss),
    // Retinal.
    row(K::MacularDegeneration, "macularDegeneration", "Macular Degeneration",
        "Central vision loss with a distorted, darkened center.",
        Cat::Retinal, Overlay, Static, B::Multiply, P::FocalLoss),
    row(K::Scotoma, "scotoma", "Scotoma",
        "A blind spot that drifts with gaze and slowly swells.",
        Cat::Retinal, Overlay, Dynamic, B::Multiply, P::FocalLoss),
    row(K::DiabeticRetinopathy, "diabeticRetinopathy", "Diabetic Retinopathy",
        "Scattered dark patches from retinal bleeding, with washed-out color.",
        Cat::Retinal, Hybrid, Static, B::Multiply, P::FocalLoss),
    row(K::RetinalDetachment, "retinalDetachment", "Retinal Detachment",
        "A dark curtain descending from the top of the field.",
        Cat::Retinal, Overlay, Dynamic, B::Multiply, P::FieldLoss),
    row(K::Floaters, "floaters", "Floaters",
        "Drifting specks and strands in the vitreous.",
        Cat::Retinal, Overlay, Dynamic, B::Multiply, P::NoiseDistortion),
    row(K::Metamorphopsia, "metamorphopsia", "Metamorphopsia",
        "Straight lines appear wavy.",
        Cat::Retinal, Overlay, Dynamic, B::Overlay, P::NoiseDistortion),
    // Neurological.
    row(K::VisualSnow, "visualSnow", "Visual Snow",
        "Persistent flickering static across the whole field.",
        Cat::Neurological, Overlay, Dynamic, B::Screen, P::NoiseDistortion),
    row(K::VisualAura, "visualAura", "Visual Aura",
        "Shimmering zig-zag arc that expands from the center.",
        Cat::Neurological, Overlay, Dynamic, B::Screen, P::Transient),
    row(K::VisualAuraLeft, "visualAuraLeft", "Visual Aura (Left)",
        "Scintillating aura in the left hemifield.",
        Cat::Neurological, Overlay, Dynamic, B::Screen, P::Transient),
    row(K::VisualAuraRight, "visualAuraRight", "Visual Aura (Right)",
        "Scintillating aura in the right hemifield.",
        Cat::Neurological, Overlay, Dynamic, B::Screen, P::Transient),
    row(K::Nystagmus, "nystagmus", "Nystagmus",
        "Involuntary rhythmic eye movement makes the scene jitter.",
        Cat::Neurological, Overlay, Dynamic, B::Normal, P::NoiseDistortion),
    row(K::Diplopia, "diplopia", "Diplopia",
        "Double vision: a displaced ghost copy of the scene.",
        Cat::Neurological, Overlay, Dynamic, B::Normal, P::DoubleVision),
    row(K::Palinopsia, "palinopsia", "Palinopsia",
        "Images persist as trailing afterimages.",
        Cat::Neurological, Overlay, Dynamic, B::Screen, P::Transient),
    row(K::CompleteBlindness, "completeBlindness", "Complete Blindness",
        "No light perception.",
        Cat::Neurological, Filter, Static, B::Normal, P::Degradation),
];

#[allow(clippy::too_many_arguments)]
const fn row(
    kind: K,
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: Cat,
    render: crate::catalog::meta::RenderKind,
    motion: crate::catalog::meta::Motion,
    blend: B,
    priority: P,
) -> ConditionMeta {
    ConditionMeta {
        kind,
        id,
        name,
        description,
        category,
        render,
        motion,
        blend,
        priority,
    }
}
