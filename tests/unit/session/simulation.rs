use super::*;
use crate::animation::clock::ClockState;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Default)]
struct Requests {
    requested: Cell<u32>,
    cancelled: Cell<u32>,
}

struct CountingScheduler(Rc<Requests>);

impl FrameScheduler for CountingScheduler {
    fn request_frame(&mut self) {
        self.0.requested.set(self.0.requested.get() + 1);
    }
    fn cancel_frame(&mut self) {
        self.0.cancelled.set(self.0.cancelled.get() + 1);
    }
}

fn session() -> SimulationSession {
    SimulationSession::new(SessionOpts::default()).unwrap()
}

#[test]
fn rejects_invalid_opts() {
    let opts = SessionOpts {
        dynamic_update_hz: Some(0.0),
        ..SessionOpts::default()
    };
    assert!(SimulationSession::new(opts).is_err());
}

#[test]
fn filter_is_recomputed_only_on_change() {
    let mut s = session();
    let effects = [VisualEffect::new("myopia", 0.5)];
    let a = s.render_frame(&effects, 0.0);
    let b = s.render_frame(&effects, 0.1);
    assert_eq!(a.filter, b.filter);
    assert_eq!(s.stats().state_changes, 1);

    let c = s.render_frame(&[VisualEffect::new("myopia", 1.0)], 0.2);
    assert_eq!(c.filter.to_string(), "blur(6px)");
    assert_eq!(s.stats().state_changes, 2);
}

#[test]
fn static_overlays_come_from_the_cache() {
    let mut s = session();
    let effects = [VisualEffect::new("glaucoma", 0.4)];
    let first = s.render_frame(&effects, 0.0);
    let second = s.render_frame(&effects, 5.0);
    assert_eq!(first.tree, second.tree);
    let stats = s.stats();
    assert_eq!(stats.static_misses, 1);
    assert_eq!(stats.static_hits, 1);
    assert_eq!(s.cached_static_overlays(), 1);

    s.render_frame(&[VisualEffect::new("glaucoma", 0.9)], 6.0);
    assert_eq!(s.cached_static_overlays(), 1);
    assert_eq!(s.stats().static_misses, 2);
}

#[test]
fn caching_can_be_disabled() {
    let opts = SessionOpts {
        cache_static_overlays: false,
        ..SessionOpts::default()
    };
    let mut s = SimulationSession::new(opts).unwrap();
    let effects = [VisualEffect::new("halos", 0.4)];
    s.render_frame(&effects, 0.0);
    s.render_frame(&effects, 1.0);
    assert_eq!(s.stats().static_hits, 0);
    assert_eq!(s.cached_static_overlays(), 0);
}

#[test]
fn throttle_reuses_dynamic_overlays_between_samples() {
    let opts = SessionOpts {
        dynamic_update_hz: Some(10.0),
        ..SessionOpts::default()
    };
    let mut s = SimulationSession::new(opts).unwrap();
    let effects = [VisualEffect::new("floaters", 0.5)];
    let a = s.render_frame(&effects, 0.0);
    let b = s.render_frame(&effects, 0.05);
    let c = s.render_frame(&effects, 0.12);
    assert_eq!(a.tree, b.tree);
    assert_ne!(a.tree, c.tree);
    assert_eq!(s.stats().dynamic_samples, 2);
    assert_eq!(s.stats().dynamic_reuses, 1);

    // A sampled frame matches an unthrottled computation at the same instant.
    let mut unthrottled = session();
    assert_eq!(unthrottled.render_frame(&effects, 0.12).tree, c.tree);
}

#[test]
fn clock_follows_dynamic_conditions() {
    let requests = Rc::new(Requests::default());
    let mut s = SimulationSession::with_scheduler(
        SessionOpts::default(),
        Box::new(CountingScheduler(requests.clone())),
    )
    .unwrap();

    s.render_frame(&[VisualEffect::new("glaucoma", 0.5)], 0.0);
    assert!(!s.is_animating());

    s.render_frame(
        &[
            VisualEffect::new("glaucoma", 0.5),
            VisualEffect::new("visualSnow", 0.5),
        ],
        0.0,
    );
    assert!(s.is_animating());
    assert_eq!(requests.requested.get(), 1);
    assert!(s.tick(16.0).is_some());

    s.render_frame(&[VisualEffect::new("visualSnow", 0.5).disabled()], 0.1);
    assert!(!s.is_animating());
    assert_eq!(requests.cancelled.get(), 1);
    assert!(s.tick(32.0).is_none());
}

#[test]
fn teardown_stops_the_clock_for_good() {
    let mut s = session();
    let effects = [VisualEffect::new("scotoma", 0.5)];
    s.render_frame(&effects, 0.0);
    assert!(s.is_animating());

    s.teardown();
    assert_eq!(s.clock().state(), ClockState::TornDown);
    let frame = s.render_frame(&effects, 1.0);
    assert_eq!(frame.tree.len(), 1);
    assert!(!s.is_animating());
    assert!(s.tick(1000.0).is_none());
}

#[test]
fn duplicate_ids_render_once() {
    let mut s = session();
    let frame = s.render_frame(
        &[
            VisualEffect::new("halos", 0.2),
            VisualEffect::new("halos", 0.9),
        ],
        0.0,
    );
    assert_eq!(frame.tree.len(), 1);
}

#[test]
fn unknown_ids_render_the_fallback() {
    let mut s = session();
    let effects = [VisualEffect::new("notARealCondition", 0.5)];
    let frame = s.render_frame(&effects, 0.0);
    assert_eq!(frame.tree.len(), 1);
    assert_eq!(frame.tree.layers[0].overlay.condition, "notARealCondition");
    assert!(frame.filter.is_neutral());
    s.render_frame(&effects, 1.0);
    assert_eq!(s.warned.len(), 1);
}

#[test]
fn set_surface_validates() {
    let mut s = session();
    assert!(
        s.set_surface(Surface {
            width: 0,
            height: 10
        })
        .is_err()
    );
    s.set_surface(Surface::new(640, 480).unwrap()).unwrap();
    assert_eq!(s.surface().width, 640);
}
