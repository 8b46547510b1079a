//! Rate-gate guarantees exercised through the public API.

use std::time::{Duration, Instant};
use wealth_mileage::{Debounce, GateDecision, RateGate, Throttle};

fn t(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}

#[test]
fn test_throttle_invokes_once_per_synchronous_burst() {
    let mut gate = Throttle::new(Duration::from_millis(16));
    let now = Instant::now();

    let passed = (0..10).filter(|_| gate.on_event(now).is_pass()).count();
    assert_eq!(passed, 1);
}

#[test]
fn test_throttle_at_most_one_pass_per_interval() {
    let mut gate = Throttle::new(Duration::from_millis(10));
    let base = Instant::now();

    // One event per millisecond for a second.
    let passed = (0..1000)
        .filter(|&ms| gate.on_event(t(base, ms)).is_pass())
        .count();
    assert_eq!(passed, 100);
}

#[test]
fn test_throttle_leading_pass_after_long_idle() {
    let mut gate = Throttle::new(Duration::from_millis(16));
    let base = Instant::now();

    assert!(gate.on_event(base).is_pass());
    // An hour later the next event still passes immediately.
    assert!(gate.on_event(base + Duration::from_secs(3600)).is_pass());
}

#[test]
fn test_debounce_fires_once_after_last_call_wait() {
    let mut gate = Debounce::new(Duration::from_millis(100));
    let base = Instant::now();

    // Calls every 50ms keep re-arming the deadline.
    for ms in [0, 50, 100, 150, 200] {
        assert_eq!(gate.on_event(t(base, ms)), GateDecision::Drop);
    }

    // 99ms after the last call: not yet.
    assert!(gate.fire_due(t(base, 299)).is_drop());
    // 100ms after the last call: fires, exactly once.
    assert!(gate.fire_due(t(base, 300)).is_pass());
    assert!(gate.fire_due(t(base, 400)).is_drop());
}

#[test]
fn test_debounce_leading_one_fire_per_burst() {
    let mut gate = Debounce::leading(Duration::from_millis(100));
    let base = Instant::now();

    // First burst.
    assert!(gate.on_event(t(base, 0)).is_pass());
    assert!(gate.on_event(t(base, 30)).is_drop());
    assert!(gate.on_event(t(base, 60)).is_drop());
    assert!(gate.fire_due(t(base, 160)).is_drop());

    // Second burst fires on its leading edge.
    assert!(gate.on_event(t(base, 500)).is_pass());
}

#[test]
fn test_gates_reset_to_initial_state() {
    let base = Instant::now();

    let mut throttle = Throttle::new(Duration::from_millis(100));
    throttle.on_event(base);
    throttle.reset();
    assert!(throttle.on_event(t(base, 1)).is_pass());

    let mut debounce = Debounce::new(Duration::from_millis(100));
    debounce.on_event(base);
    debounce.reset();
    assert!(!debounce.is_pending());
    assert!(debounce.fire_due(t(base, 200)).is_drop());
}
