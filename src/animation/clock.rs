use crate::foundation::error::{VisionError, VisionResult};

/// Host hook for frame scheduling (`requestAnimationFrame`-style).
///
/// The clock requests exactly one frame at a time and cancels the outstanding request when it
/// stops, so a stopped clock never leaves a recurring callback behind.
pub trait FrameScheduler {
    /// Ask the host to call [`AnimationClock::tick`] on its next frame.
    fn request_frame(&mut self);
    /// Withdraw the outstanding request, if any.
    fn cancel_frame(&mut self);
}

/// Scheduler for hosts that poll [`AnimationClock::is_scheduled`] instead of receiving callbacks.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualScheduler;

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {}
    fn cancel_frame(&mut self) {}
}

/// One delivered frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameTick {
    /// Monotonic time in seconds.
    pub time: f64,
    /// Seconds since the previous delivered tick (zero for the first tick of a run).
    pub delta: f64,
    /// Number of ticks delivered since the clock was created.
    pub frame: u64,
}

/// Handle returned by [`AnimationClock::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockState {
    /// No dynamic condition is active; no frame is requested.
    Idle,
    /// At least one dynamic condition is active; a frame is always outstanding.
    Running,
    /// The rendering surface went away. Terminal.
    TornDown,
}

struct Subscriber {
    id: SubscriptionId,
    callback: Box<dyn FnMut(FrameTick)>,
}

/// Single time source of the pipeline.
///
/// Runs only while some dynamic condition is active. Host timestamps are milliseconds and are
/// treated as opaque; the clock only enforces monotonicity.
pub struct AnimationClock {
    state: ClockState,
    scheduler: Box<dyn FrameScheduler>,
    subscribers: Vec<Subscriber>,
    next_id: u64,
    last_time: Option<f64>,
    run_started: bool,
    frame: u64,
}

impl AnimationClock {
    pub fn new(scheduler: Box<dyn FrameScheduler>) -> Self {
        Self {
            state: ClockState::Idle,
            scheduler,
            subscribers: Vec::new(),
            next_id: 0,
            last_time: None,
            run_started: false,
            frame: 0,
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    /// `true` while the host should deliver another frame.
    pub fn is_scheduled(&self) -> bool {
        self.state == ClockState::Running
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Register a per-frame callback. Fails after teardown.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(FrameTick) + 'static,
    ) -> VisionResult<SubscriptionId> {
        if self.state == ClockState::TornDown {
            return Err(VisionError::validation(
                "cannot subscribe to a torn-down animation clock",
            ));
        }
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        Ok(id)
    }

    /// Remove a callback; returns `false` when the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    /// Start or stop the clock depending on whether any dynamic condition is active.
    pub fn set_dynamic_active(&mut self, active: bool) {
        match (self.state, active) {
            (ClockState::Idle, true) => {
                tracing::debug!("animation clock started");
                self.state = ClockState::Running;
                self.run_started = false;
                self.scheduler.request_frame();
            }
            (ClockState::Running, false) => {
                tracing::debug!("animation clock stopped");
                self.state = ClockState::Idle;
                self.scheduler.cancel_frame();
            }
            _ => {}
        }
    }

    /// Deliver a host frame at `host_ms` milliseconds.
    ///
    /// Returns `None` (and notifies nobody) unless the clock is running. Timestamps that go
    /// backwards or are not finite reuse the last delivered time.
    pub fn tick(&mut self, host_ms: f64) -> Option<FrameTick> {
        if self.state != ClockState::Running {
            return None;
        }

        let candidate = host_ms / 1000.0;
        let time = match self.last_time {
            Some(last) if !candidate.is_finite() || candidate < last => last,
            None if !candidate.is_finite() => 0.0,
            _ => candidate,
        };
        let delta = match (self.run_started, self.last_time) {
            (true, Some(last)) => time - last,
            _ => 0.0,
        };
        self.last_time = Some(time);
        self.run_started = true;

        let tick = FrameTick {
            time,
            delta,
            frame: self.frame,
        };
        self.frame += 1;

        for s in &mut self.subscribers {
            (s.callback)(tick);
        }

        // A subscriber cannot reach the clock, so the state is unchanged here.
        self.scheduler.request_frame();
        Some(tick)
    }

    /// Stop for good: cancel the outstanding frame and drop every subscriber.
    pub fn teardown(&mut self) {
        if self.state == ClockState::Running {
            self.scheduler.cancel_frame();
        }
        self.state = ClockState::TornDown;
        self.subscribers.clear();
        tracing::debug!("animation clock torn down");
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(Box::new(ManualScheduler))
    }
}

impl Drop for AnimationClock {
    fn drop(&mut self) {
        if self.state == ClockState::Running {
            self.scheduler.cancel_frame();
        }
    }
}

impl std::fmt::Debug for AnimationClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationClock")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .field("last_time", &self.last_time)
            .field("frame", &self.frame)
            .finish()
    }
}

/// Sampling-rate limiter for dynamic overlay recomputation.
///
/// Decides whether a tick at `t` should resample; it never alters what a sample computes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Throttle {
    min_interval: f64,
    last_sample: Option<f64>,
}

impl Throttle {
    /// `None` (or a non-positive rate) samples every tick.
    pub fn new(updates_per_sec: Option<f64>) -> Self {
        let min_interval = match updates_per_sec {
            Some(hz) if hz.is_finite() && hz > 0.0 => 1.0 / hz,
            _ => 0.0,
        };
        Self {
            min_interval,
            last_sample: None,
        }
    }

    /// Returns `true` and records `t` when enough time has passed since the last sample.
    pub fn should_sample(&mut self, t: f64) -> bool {
        let due = match self.last_sample {
            None => true,
            Some(last) => t < last || t - last >= self.min_interval,
        };
        if due {
            self.last_sample = Some(t);
        }
        due
    }

    /// Forget the last sample so the next tick resamples unconditionally.
    pub fn reset(&mut self) {
        self.last_sample = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
