//! Rate-gate state machines: throttle and debounce.
//!
//! Gates are pure state machines driven by explicit timestamps. They own no
//! timers and spawn nothing; a host feeds them `Instant`s (usually from the
//! [`Clock`](crate::application::ports::Clock) port) and acts on the returned
//! decisions. Deferred work (a trailing debounce fire) is surfaced as a
//! deadline for the host to poll.

use std::time::{Duration, Instant};

/// Decision made by a rate gate for a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Let the event through.
    Pass,
    /// Drop the event (not queued, not compensated later).
    Drop,
}

impl GateDecision {
    /// Check if this decision is Pass.
    pub fn is_pass(&self) -> bool {
        matches!(self, GateDecision::Pass)
    }

    /// Check if this decision is Drop.
    pub fn is_drop(&self) -> bool {
        matches!(self, GateDecision::Drop)
    }
}

/// Trait for rate-shaping gates.
pub trait RateGate {
    /// Register an event at `now` and decide whether it passes.
    fn on_event(&mut self, now: Instant) -> GateDecision;

    /// Reset the gate to its initial state.
    fn reset(&mut self);
}

/// Leading-edge throttle.
///
/// The first event opens a window and passes immediately. Events arriving
/// within `interval` of the window start are dropped and do not extend the
/// window. Once the window elapses, the next event passes and starts a new
/// one. At most one event passes per interval; there is no trailing
/// compensation for dropped events.
///
/// # Example
/// ```
/// use wealth_mileage::domain::gate::{GateDecision, RateGate, Throttle};
/// use std::time::{Duration, Instant};
///
/// let mut gate = Throttle::new(Duration::from_millis(16));
/// let now = Instant::now();
///
/// assert_eq!(gate.on_event(now), GateDecision::Pass);
/// assert_eq!(gate.on_event(now + Duration::from_millis(5)), GateDecision::Drop);
/// assert_eq!(gate.on_event(now + Duration::from_millis(16)), GateDecision::Pass);
/// ```
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    window_start: Option<Instant>,
}

impl Throttle {
    /// Create a throttle with the given window length.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_start: None,
        }
    }

    /// The configured window length.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl RateGate for Throttle {
    fn on_event(&mut self, now: Instant) -> GateDecision {
        if let Some(start) = self.window_start {
            if now.saturating_duration_since(start) < self.interval {
                return GateDecision::Drop;
            }
        }
        self.window_start = Some(now);
        GateDecision::Pass
    }

    fn reset(&mut self) {
        self.window_start = None;
    }
}

/// Debounce: collapses a burst of events into a single fire.
///
/// Every event re-arms a deadline `wait` after itself. In trailing mode
/// (default) nothing passes on the event itself; the fire happens when the
/// deadline elapses with no further events, reported by [`fire_due`]. In
/// leading mode the first event of a burst passes immediately and the
/// elapsed deadline only closes the burst. Exactly one fire per burst,
/// whichever the mode.
///
/// A new event implicitly cancels the pending deadline by re-arming it; there
/// is no other cancellation.
///
/// [`fire_due`]: Debounce::fire_due
#[derive(Debug, Clone)]
pub struct Debounce {
    wait: Duration,
    immediate: bool,
    deadline: Option<Instant>,
}

impl Debounce {
    /// Create a trailing-mode debounce: fires after `wait` of quiet.
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            immediate: false,
            deadline: None,
        }
    }

    /// Create a leading-mode debounce: fires on the first event of a burst.
    pub fn leading(wait: Duration) -> Self {
        Self {
            wait,
            immediate: true,
            deadline: None,
        }
    }

    /// The configured quiet period.
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Whether a deadline is currently armed.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any, so a host can schedule a wakeup.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Check whether the armed deadline has elapsed at `now`.
    ///
    /// Consumes the deadline when due. Returns `Pass` only in trailing mode;
    /// in leading mode an elapsed deadline just ends the burst so the next
    /// event fires again.
    pub fn fire_due(&mut self, now: Instant) -> GateDecision {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                if self.immediate {
                    GateDecision::Drop
                } else {
                    GateDecision::Pass
                }
            }
            _ => GateDecision::Drop,
        }
    }
}

impl RateGate for Debounce {
    fn on_event(&mut self, now: Instant) -> GateDecision {
        let fire_now = self.immediate && self.deadline.is_none();
        self.deadline = Some(now + self.wait);
        if fire_now {
            GateDecision::Pass
        } else {
            GateDecision::Drop
        }
    }

    fn reset(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn test_throttle_leading_edge_never_delayed() {
        let mut gate = Throttle::new(Duration::from_millis(100));
        let now = Instant::now();
        assert_eq!(gate.on_event(now), GateDecision::Pass);
    }

    #[test]
    fn test_throttle_drops_within_window() {
        let mut gate = Throttle::new(Duration::from_millis(100));
        let base = Instant::now();

        assert!(gate.on_event(base).is_pass());
        for ms in [1, 10, 50, 99] {
            assert!(gate.on_event(t(base, ms)).is_drop(), "at {}ms", ms);
        }
        assert!(gate.on_event(t(base, 100)).is_pass());
    }

    #[test]
    fn test_throttle_burst_passes_exactly_once() {
        let mut gate = Throttle::new(Duration::from_millis(16));
        let now = Instant::now();

        let passed = (0..10).filter(|_| gate.on_event(now).is_pass()).count();
        assert_eq!(passed, 1);
    }

    #[test]
    fn test_throttle_window_not_extended_by_drops() {
        let mut gate = Throttle::new(Duration::from_millis(100));
        let base = Instant::now();

        assert!(gate.on_event(base).is_pass());
        // Drops at 90ms must not push the window past 100ms.
        assert!(gate.on_event(t(base, 90)).is_drop());
        assert!(gate.on_event(t(base, 100)).is_pass());
    }

    #[test]
    fn test_throttle_reset() {
        let mut gate = Throttle::new(Duration::from_millis(100));
        let base = Instant::now();

        assert!(gate.on_event(base).is_pass());
        assert!(gate.on_event(t(base, 1)).is_drop());

        gate.reset();
        assert!(gate.on_event(t(base, 2)).is_pass());
    }

    #[test]
    fn test_debounce_trailing_fires_after_quiet() {
        let mut gate = Debounce::new(Duration::from_millis(250));
        let base = Instant::now();

        assert!(gate.on_event(base).is_drop());
        assert!(gate.on_event(t(base, 100)).is_drop());
        assert!(gate.on_event(t(base, 200)).is_drop());

        // Still inside the quiet period of the last call.
        assert!(gate.fire_due(t(base, 300)).is_drop());

        // 250ms after the last call.
        assert!(gate.fire_due(t(base, 450)).is_pass());
        assert!(!gate.is_pending());

        // Already consumed; no double fire.
        assert!(gate.fire_due(t(base, 500)).is_drop());
    }

    #[test]
    fn test_debounce_rearm_resets_deadline() {
        let mut gate = Debounce::new(Duration::from_millis(100));
        let base = Instant::now();

        gate.on_event(base);
        assert_eq!(gate.next_deadline(), Some(t(base, 100)));

        gate.on_event(t(base, 50));
        assert_eq!(gate.next_deadline(), Some(t(base, 150)));
    }

    #[test]
    fn test_debounce_leading_fires_first_of_burst() {
        let mut gate = Debounce::leading(Duration::from_millis(100));
        let base = Instant::now();

        assert!(gate.on_event(base).is_pass());
        assert!(gate.on_event(t(base, 10)).is_drop());
        assert!(gate.on_event(t(base, 20)).is_drop());

        // Burst ends; no trailing fire in leading mode.
        assert!(gate.fire_due(t(base, 200)).is_drop());

        // Next burst fires on its leading edge again.
        assert!(gate.on_event(t(base, 300)).is_pass());
    }

    #[test]
    fn test_debounce_exactly_one_fire_per_burst() {
        let mut gate = Debounce::new(Duration::from_millis(50));
        let base = Instant::now();

        let mut fires = 0;
        for ms in 0..10 {
            if gate.on_event(t(base, ms * 10)).is_pass() {
                fires += 1;
            }
        }
        if gate.fire_due(t(base, 90 + 50)).is_pass() {
            fires += 1;
        }
        if gate.fire_due(t(base, 90 + 100)).is_pass() {
            fires += 1;
        }
        assert_eq!(fires, 1);
    }

    #[test]
    fn test_debounce_reset_cancels_pending() {
        let mut gate = Debounce::new(Duration::from_millis(50));
        let base = Instant::now();

        gate.on_event(base);
        assert!(gate.is_pending());

        gate.reset();
        assert!(!gate.is_pending());
        assert!(gate.fire_due(t(base, 100)).is_drop());
    }
}
