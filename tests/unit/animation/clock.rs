use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
struct Counts {
    requests: Cell<u32>,
    cancels: Cell<u32>,
}

struct CountingScheduler(Rc<Counts>);

impl FrameScheduler for CountingScheduler {
    fn request_frame(&mut self) {
        self.0.requests.set(self.0.requests.get() + 1);
    }
    fn cancel_frame(&mut self) {
        self.0.cancels.set(self.0.cancels.get() + 1);
    }
}

fn counting_clock() -> (AnimationClock, Rc<Counts>) {
    let counts = Rc::new(Counts::default());
    let clock = AnimationClock::new(Box::new(CountingScheduler(counts.clone())));
    (clock, counts)
}

#[test]
fn idle_clock_delivers_nothing() {
    let (mut clock, counts) = counting_clock();
    let hits = Rc::new(Cell::new(0));
    let h = hits.clone();
    clock.subscribe(move |_| h.set(h.get() + 1)).unwrap();

    assert_eq!(clock.tick(16.0), None);
    assert_eq!(hits.get(), 0);
    assert_eq!(counts.requests.get(), 0);
    assert!(!clock.is_scheduled());
}

#[test]
fn running_clock_notifies_every_tick_and_rearms() {
    let (mut clock, counts) = counting_clock();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();
    clock.subscribe(move |t| s.borrow_mut().push(t.time)).unwrap();

    clock.set_dynamic_active(true);
    assert!(clock.is_scheduled());
    assert_eq!(counts.requests.get(), 1);

    let t0 = clock.tick(1000.0).unwrap();
    let t1 = clock.tick(1016.0).unwrap();
    assert_eq!(t0.delta, 0.0);
    assert!((t1.delta - 0.016).abs() < 1e-9);
    assert_eq!(t1.frame, 1);
    assert_eq!(*seen.borrow(), vec![1.0, 1.016]);
    assert_eq!(counts.requests.get(), 3);
}

#[test]
fn time_is_monotonic_under_backwards_or_nan_timestamps() {
    let mut clock = AnimationClock::default();
    clock.set_dynamic_active(true);
    let a = clock.tick(2000.0).unwrap();
    let b = clock.tick(1500.0).unwrap();
    let c = clock.tick(f64::NAN).unwrap();
    assert_eq!(a.time, 2.0);
    assert_eq!(b.time, 2.0);
    assert_eq!(c.time, 2.0);
    assert_eq!(b.delta, 0.0);
}

#[test]
fn stopping_cancels_outstanding_frame() {
    let (mut clock, counts) = counting_clock();
    clock.set_dynamic_active(true);
    clock.tick(0.0);
    clock.set_dynamic_active(false);
    assert_eq!(counts.cancels.get(), 1);
    assert_eq!(clock.state(), ClockState::Idle);
    assert_eq!(clock.tick(50.0), None);

    // Restarting does not carry the idle gap into delta.
    clock.set_dynamic_active(true);
    let t = clock.tick(5000.0).unwrap();
    assert_eq!(t.delta, 0.0);
}

#[test]
fn teardown_is_terminal() {
    let (mut clock, counts) = counting_clock();
    clock.subscribe(|_| {}).unwrap();
    clock.set_dynamic_active(true);
    clock.teardown();

    assert_eq!(counts.cancels.get(), 1);
    assert_eq!(clock.subscriber_count(), 0);
    assert!(clock.subscribe(|_| {}).is_err());

    clock.set_dynamic_active(true);
    assert_eq!(clock.state(), ClockState::TornDown);
    assert_eq!(clock.tick(100.0), None);
    assert_eq!(counts.requests.get(), 1);
}

#[test]
fn unsubscribe_removes_only_that_callback() {
    let mut clock = AnimationClock::default();
    let a = clock.subscribe(|_| {}).unwrap();
    let _b = clock.subscribe(|_| {}).unwrap();
    assert!(clock.unsubscribe(a));
    assert!(!clock.unsubscribe(a));
    assert_eq!(clock.subscriber_count(), 1);
}

#[test]
fn throttle_limits_sampling_rate() {
    let mut th = Throttle::new(Some(10.0));
    assert!(th.should_sample(0.0));
    assert!(!th.should_sample(0.05));
    assert!(th.should_sample(0.1));
    assert!(!th.should_sample(0.15));
    th.reset();
    assert!(th.should_sample(0.15));
}

#[test]
fn unthrottled_samples_every_tick() {
    let mut th = Throttle::new(None);
    assert!(th.should_sample(0.0));
    assert!(th.should_sample(0.0));
    assert!(th.should_sample(0.001));
    let mut bad = Throttle::new(Some(f64::NAN));
    assert!(bad.should_sample(1.0));
    assert!(bad.should_sample(1.0));
}
