use crate::catalog::meta::ConditionMeta;
use crate::catalog::table::CATALOG;

/// Organisational grouping of conditions.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ConditionCategory {
    ColorVision,
    Refractive,
    OpticalMedia,
    VisualField,
    Retinal,
    Neurological,
}

impl ConditionCategory {
    pub fn all() -> [Self; 6] {
        [
            Self::ColorVision,
            Self::Refractive,
            Self::OpticalMedia,
            Self::VisualField,
            Self::Retinal,
            Self::Neurological,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ColorVision => "Color vision",
            Self::Refractive => "Refractive errors",
            Self::OpticalMedia => "Optical media",
            Self::VisualField => "Visual field",
            Self::Retinal => "Retinal",
            Self::Neurological => "Neurological",
        }
    }
}

/// Every condition the engine knows how to render.
///
/// Discriminants index [`CATALOG`]; the serde name is the catalog id.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ConditionKind {
    Protanopia,
    Deuteranopia,
    Tritanopia,
    Protanomaly,
    Deuteranomaly,
    Tritanomaly,
    Achromatopsia,
    Achromatomaly,
    Myopia,
    Hyperopia,
    Astigmatism,
    Presbyopia,
    Cataracts,
    VitreousHemorrhage,
    Glare,
    Halos,
    Starbursting,
    Photophobia,
    HemianopiaLeft,
    HemianopiaRight,
    BitemporalHemianopia,
    QuadrantanopiaSuperior,
    QuadrantanopiaInferior,
    TunnelVision,
    Glaucoma,
    RetinitisPigmentosa,
    MacularDegeneration,
    Scotoma,
    DiabeticRetinopathy,
    RetinalDetachment,
    Floaters,
    Metamorphopsia,
    VisualSnow,
    VisualAura,
    VisualAuraLeft,
    VisualAuraRight,
    Nystagmus,
    Diplopia,
    Palinopsia,
    CompleteBlindness,
}

impl ConditionKind {
    pub const COUNT: usize = 40;

    /// Resolve a catalog id (`"hemianopiaLeft"`).
    pub fn from_id(id: &str) -> Option<Self> {
        CATALOG.iter().find(|m| m.id == id).map(|m| m.kind)
    }

    pub fn meta(self) -> &'static ConditionMeta {
        &CATALOG[self as usize]
    }

    pub fn id(self) -> &'static str {
        self.meta().id
    }

    pub fn all() -> impl Iterator<Item = Self> {
        CATALOG.iter().map(|m| m.kind)
    }
}

impl std::fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
