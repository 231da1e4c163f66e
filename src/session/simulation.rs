use crate::animation::clock::{AnimationClock, FrameScheduler, FrameTick, ManualScheduler, Throttle};
use crate::compose::compositor::LayerCompositor;
use crate::effects::fingerprint::{Fingerprint, fingerprint_condition};
use crate::effects::model::VisualEffect;
use crate::effects::state::EffectStateProcessor;
use crate::filter::descriptor::FilterDescriptor;
use crate::filter::generator::FilterGenerator;
use crate::foundation::core::Surface;
use crate::foundation::error::VisionResult;
use crate::foundation::math::finite_time;
use crate::overlay::descriptor::OverlayDescriptor;
use crate::overlay::generator::OverlayGenerator;
use crate::session::frame::RenderFrame;
use crate::session::opts::SessionOpts;
use std::collections::{HashMap, HashSet};

/// Session counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SessionStats {
    /// Frames produced by [`SimulationSession::render_frame`].
    pub frames: u64,
    /// Frames on which the enabled effect set changed.
    pub state_changes: u64,
    /// Static overlays served from the cache.
    pub static_hits: u64,
    /// Static overlays generated.
    pub static_misses: u64,
    /// Dynamic overlays generated.
    pub dynamic_samples: u64,
    /// Dynamic overlays reused because the throttle skipped the frame.
    pub dynamic_reuses: u64,
}

/// One running simulation: the explicit context every pipeline stage runs in.
///
/// Each frame runs strictly in order: effect diff, then filter and overlay generation, then
/// compositing. Effect changes take effect on the frame that observes them. The whole-surface
/// filter is recomputed only when the enabled set changes; static overlays are cached per
/// `(condition, intensity)`; dynamic overlays are resampled at most `dynamic_update_hz` times per
/// second.
pub struct SimulationSession {
    opts: SessionOpts,
    processor: EffectStateProcessor,
    filters: FilterGenerator,
    overlays: OverlayGenerator,
    compositor: LayerCompositor,
    clock: AnimationClock,
    throttle: Throttle,

    filter: FilterDescriptor,
    static_cache: HashMap<Fingerprint, OverlayDescriptor>,
    dynamic_cache: HashMap<Fingerprint, OverlayDescriptor>,
    warned: HashSet<String>,
    stats: SessionStats,
}

impl SimulationSession {
    /// Session driven by a host that polls [`AnimationClock::is_scheduled`].
    pub fn new(opts: SessionOpts) -> VisionResult<Self> {
        Self::with_scheduler(opts, Box::new(ManualScheduler))
    }

    /// Session whose clock requests frames through `scheduler`.
    pub fn with_scheduler(
        opts: SessionOpts,
        scheduler: Box<dyn FrameScheduler>,
    ) -> VisionResult<Self> {
        opts.validate()?;
        Ok(Self {
            throttle: Throttle::new(opts.dynamic_update_hz),
            opts,
            processor: EffectStateProcessor::new(),
            filters: FilterGenerator::standard(),
            overlays: OverlayGenerator::standard(),
            compositor: LayerCompositor::new(),
            clock: AnimationClock::new(scheduler),
            filter: FilterDescriptor::default(),
            static_cache: HashMap::new(),
            dynamic_cache: HashMap::new(),
            warned: HashSet::new(),
            stats: SessionStats::default(),
        })
    }

    pub fn opts(&self) -> &SessionOpts {
        &self.opts
    }

    pub fn surface(&self) -> Surface {
        self.opts.surface
    }

    /// Resize the display surface. Overlay geometry is surface-relative, so no cache is affected.
    pub fn set_surface(&mut self, surface: Surface) -> VisionResult<()> {
        let surface = Surface::new(surface.width, surface.height)?;
        self.opts.surface = surface;
        Ok(())
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Mutable clock access, for subscribing per-frame callbacks.
    pub fn clock_mut(&mut self) -> &mut AnimationClock {
        &mut self.clock
    }

    /// `true` while a dynamic condition is active and the host should keep delivering frames.
    pub fn is_animating(&self) -> bool {
        self.clock.is_scheduled()
    }

    /// Forward a host frame to the clock.
    pub fn tick(&mut self, host_ms: f64) -> Option<FrameTick> {
        self.clock.tick(host_ms)
    }

    /// Number of cached static overlays.
    pub fn cached_static_overlays(&self) -> usize {
        self.static_cache.len()
    }

    /// Compute the filter and overlay stack for `effects` at `time` seconds.
    ///
    /// Never fails: unknown condition ids render the fallback overlay and are logged once per
    /// session.
    #[tracing::instrument(level = "debug", skip(self, effects), fields(effects = effects.len()))]
    pub fn render_frame(&mut self, effects: &[VisualEffect], time: f64) -> RenderFrame {
        let time = finite_time(time);
        let update = self.processor.update(effects);
        let changed = update.changed;
        let enabled = update.enabled;

        if changed {
            self.stats.state_changes += 1;
            self.filter = self.filters.generate(enabled);

            let live: HashSet<Fingerprint> = enabled
                .iter()
                .map(|e| fingerprint_condition(&e.id, e.intensity))
                .collect();
            self.static_cache.retain(|k, _| live.contains(k));
            self.dynamic_cache.retain(|k, _| live.contains(k));
            self.throttle.reset();

            let dynamic = enabled
                .iter()
                .filter_map(VisualEffect::meta)
                .any(|m| m.has_overlay() && m.is_dynamic());
            self.clock.set_dynamic_active(dynamic);
            tracing::debug!(
                enabled = enabled.len(),
                dynamic,
                "effect set changed; filter recomputed and overlay caches pruned"
            );
        }

        let sample = self.throttle.should_sample(time);
        let mut seen: HashSet<&str> = HashSet::with_capacity(enabled.len());
        let mut overlays = Vec::with_capacity(enabled.len());

        for e in enabled {
            // First enabled entry per id wins.
            if !seen.insert(e.id.as_str()) {
                continue;
            }
            let meta = e.meta();
            if meta.is_some_and(|m| !m.has_overlay()) {
                continue;
            }
            if meta.is_none() && self.warned.insert(e.id.clone()) {
                tracing::warn!(id = %e.id, "unknown condition; rendering fallback overlay");
            }

            let key = fingerprint_condition(&e.id, e.intensity);
            let descriptor = if meta.is_some_and(|m| m.is_dynamic()) {
                match self.dynamic_cache.get(&key) {
                    Some(d) if !sample => {
                        self.stats.dynamic_reuses += 1;
                        d.clone()
                    }
                    _ => {
                        self.stats.dynamic_samples += 1;
                        let d = self.overlays.generate(&e.id, e.intensity, time);
                        self.dynamic_cache.insert(key, d.clone());
                        d
                    }
                }
            } else if self.opts.cache_static_overlays {
                match self.static_cache.get(&key) {
                    Some(d) => {
                        self.stats.static_hits += 1;
                        d.clone()
                    }
                    None => {
                        self.stats.static_misses += 1;
                        let d = self.overlays.generate(&e.id, e.intensity, time);
                        self.static_cache.insert(key, d.clone());
                        d
                    }
                }
            } else {
                self.stats.static_misses += 1;
                self.overlays.generate(&e.id, e.intensity, time)
            };
            overlays.push(descriptor);
        }

        let tree = self.compositor.composite(overlays);
        self.stats.frames += 1;
        RenderFrame {
            time,
            filter: self.filter.clone(),
            tree,
        }
    }

    /// The rendering surface went away: stop the clock for good and drop cached state.
    ///
    /// Later [`render_frame`](Self::render_frame) calls still return descriptors, but the clock
    /// never schedules another frame.
    pub fn teardown(&mut self) {
        self.clock.teardown();
        self.processor.reset();
        self.static_cache.clear();
        self.dynamic_cache.clear();
        self.filter = FilterDescriptor::default();
        tracing::debug!("simulation session torn down");
    }
}

impl std::fmt::Debug for SimulationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationSession")
            .field("opts", &self.opts)
            .field("clock", &self.clock)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/simulation.rs"]
mod tests;
