//! Rate-limited closure wrappers.
//!
//! Wraps a callback so that invoking the wrapper applies a rate gate first.
//! This is the convenience surface over the state machines in
//! [`crate::domain::gate`]; hosts that want explicit control can drive the
//! gates directly.

use crate::application::ports::Clock;
use crate::domain::gate::{Debounce, GateDecision, RateGate, Throttle};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A callback wrapped in a leading-edge throttle.
///
/// `call()` invokes the callback at most once per interval; calls inside the
/// window are dropped.
///
/// # Example
/// ```
/// use wealth_mileage::application::limiter::Throttled;
/// use wealth_mileage::infrastructure::clock::SystemClock;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let mut hits = 0;
/// let mut throttled = Throttled::new(
///     || hits += 1,
///     Duration::from_millis(16),
///     Arc::new(SystemClock::new()),
/// );
///
/// for _ in 0..10 {
///     throttled.call();
/// }
/// drop(throttled);
/// assert_eq!(hits, 1);
/// ```
pub struct Throttled<F> {
    gate: Throttle,
    clock: Arc<dyn Clock>,
    func: F,
}

impl<F: FnMut()> Throttled<F> {
    /// Wrap `func` with a throttle of the given interval.
    pub fn new(func: F, interval: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            gate: Throttle::new(interval),
            clock,
            func,
        }
    }

    /// Invoke the callback if the throttle window allows it.
    pub fn call(&mut self) -> GateDecision {
        let decision = self.gate.on_event(self.clock.now());
        if decision.is_pass() {
            (self.func)();
        }
        decision
    }

    /// Reset the throttle window.
    pub fn reset(&mut self) {
        self.gate.reset();
    }
}

/// A callback wrapped in a debounce.
///
/// In trailing mode (the default) the callback runs only after `wait` has
/// elapsed with no further `call()`s; the host drives that by invoking
/// [`poll`](Debounced::poll), typically from its event loop or a scheduled
/// wakeup at [`next_deadline`](Debounced::next_deadline). In leading mode the
/// first `call()` of a burst runs the callback immediately and `poll` only
/// closes the burst.
pub struct Debounced<F> {
    gate: Debounce,
    clock: Arc<dyn Clock>,
    func: F,
}

impl<F: FnMut()> Debounced<F> {
    /// Wrap `func` with a trailing-mode debounce.
    pub fn new(func: F, wait: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            gate: Debounce::new(wait),
            clock,
            func,
        }
    }

    /// Wrap `func` with a leading-mode debounce.
    pub fn leading(func: F, wait: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            gate: Debounce::leading(wait),
            clock,
            func,
        }
    }

    /// Register a call, running the callback on a leading edge if configured.
    pub fn call(&mut self) -> GateDecision {
        let decision = self.gate.on_event(self.clock.now());
        if decision.is_pass() {
            (self.func)();
        }
        decision
    }

    /// Run the callback if a trailing deadline has elapsed.
    pub fn poll(&mut self) -> GateDecision {
        let decision = self.gate.fire_due(self.clock.now());
        if decision.is_pass() {
            (self.func)();
        }
        decision
    }

    /// The pending deadline, if a burst is still settling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.gate.next_deadline()
    }

    /// Cancel any pending deadline.
    pub fn reset(&mut self) {
        self.gate.reset();
    }
}
