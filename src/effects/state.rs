use crate::effects::fingerprint::EffectKey;
use crate::effects::model::VisualEffect;
use std::collections::HashSet;

/// Result of [`EffectStateProcessor::update`].
#[derive(Clone, Copy, Debug)]
pub struct EffectUpdate<'a> {
    /// `true` when the enabled `(id, intensity)` set differs from the previous call.
    pub changed: bool,
    /// Enabled effects in input order.
    pub enabled: &'a [VisualEffect],
}

/// Diffs successive effect snapshots and exposes the enabled subset.
///
/// Comparison is structural: two snapshots with equal enabled `(id, intensity)` sets compare
/// equal regardless of list order, object identity, or display metadata. Only the first enabled
/// entry per id counts, matching the filter and overlay paths; repeating an id changes nothing,
/// while reordering duplicates with different intensities does. The first update always
/// reports a change so downstream caches get populated.
#[derive(Debug, Default)]
pub struct EffectStateProcessor {
    previous: Option<Vec<EffectKey>>,
    enabled: Vec<VisualEffect>,
    changed: bool,
    scratch: Vec<EffectKey>,
}

impl EffectStateProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, effects: &[VisualEffect]) -> EffectUpdate<'_> {
        // Keys follow what renders: the first enabled entry per id, compared as a set.
        self.scratch.clear();
        let mut seen: HashSet<&str> = HashSet::with_capacity(effects.len());
        self.scratch.extend(
            effects
                .iter()
                .filter(|e| e.enabled && seen.insert(e.id.as_str()))
                .map(EffectKey::of),
        );
        self.scratch.sort();

        let changed = match &self.previous {
            Some(prev) => *prev != self.scratch,
            None => true,
        };

        if changed {
            let keys = std::mem::take(&mut self.scratch);
            self.scratch = self.previous.replace(keys).unwrap_or_default();
            tracing::debug!(
                enabled = self.previous.as_ref().map_or(0, Vec::len),
                "effect state changed"
            );
        }

        // The enabled list is rebuilt even when unchanged so input order and display metadata
        // follow the latest snapshot.
        self.enabled.clear();
        self.enabled
            .extend(effects.iter().filter(|e| e.enabled).cloned());
        self.changed = changed;

        EffectUpdate {
            changed,
            enabled: &self.enabled,
        }
    }

    /// Whether the most recent update reported a change.
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Enabled subset from the most recent update.
    pub fn enabled(&self) -> &[VisualEffect] {
        &self.enabled
    }

    /// Forget the previous snapshot; the next update reports a change.
    pub fn reset(&mut self) {
        self.previous = None;
        self.enabled.clear();
        self.changed = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/state.rs"]
mod tests;
