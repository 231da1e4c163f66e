use crate::effects::model::VisualEffect;
use crate::foundation::core::Intensity;
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x5f3a_91c2_e4d8_07b6;

/// Stable 128-bit fingerprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct Fingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Order-sensitive hasher over primitive writes. Floats hash by bit pattern.
pub(crate) struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    pub(crate) fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    pub(crate) fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    pub(crate) fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    pub(crate) fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    /// Length-prefixed so adjacent strings cannot alias.
    pub(crate) fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    pub(crate) fn finish(self) -> Fingerprint {
        let v = self.inner.digest128();
        Fingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

/// Structural key of one enabled effect: everything that can change its rendered output.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct EffectKey {
    pub(crate) id: String,
    pub(crate) intensity_bits: u64,
}

impl EffectKey {
    pub(crate) fn of(e: &VisualEffect) -> Self {
        Self {
            id: e.id.clone(),
            intensity_bits: e.intensity.to_bits(),
        }
    }
}

/// Fingerprint of an `(id, intensity)` pair; the static overlay cache key.
pub(crate) fn fingerprint_condition(id: &str, intensity: Intensity) -> Fingerprint {
    let mut h = StableHasher::new();
    h.write_str(id);
    h.write_u64(intensity.to_bits());
    h.finish()
}

/// Fingerprint of the enabled subset, independent of list order.
pub fn fingerprint_effects(effects: &[VisualEffect]) -> Fingerprint {
    let mut keys: Vec<EffectKey> = effects
        .iter()
        .filter(|e| e.enabled)
        .map(EffectKey::of)
        .collect();
    keys.sort();

    let mut h = StableHasher::new();
    h.write_u32(keys.len() as u32);
    for k in &keys {
        h.write_str(&k.id);
        h.write_u64(k.intensity_bits);
    }
    h.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/fingerprint.rs"]
mod tests;
