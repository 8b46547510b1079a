//! Page engine facade.
//!
//! The surface a host (the DOM/rendering layer) binds to: scroll and resize
//! events in, derived state, quiz results, and formatted calculator output
//! back. Built with a validating builder, in the spirit of the page's
//! original wiring: a 16 ms scroll throttle, a 250 ms resize debounce, and a
//! 45 mph travel speed.

use crate::application::controller::{PageState, ScrollStateController};
use crate::application::metrics::{EngineMetrics, MetricsSnapshot};
use crate::application::ports::Clock;
use crate::application::quiz::QuizEngine;
use crate::domain::convert::{to_distance_miles, to_duration_hours, DEFAULT_SPEED_MPH};
use crate::domain::error::InvalidInput;
use crate::domain::format::{format_distance, format_duration, format_money};
use crate::domain::quiz::QuizResult;
use crate::infrastructure::clock::SystemClock;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default scroll throttle window (roughly one 60fps frame).
pub const DEFAULT_SCROLL_INTERVAL: Duration = Duration::from_millis(16);

/// Default resize debounce quiet period.
pub const DEFAULT_RESIZE_WAIT: Duration = Duration::from_millis(250);

/// Error returned when building a [`PageEngine`] fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// Scroll throttle interval must be greater than zero
    ZeroScrollInterval,
    /// Resize debounce wait must be greater than zero
    ZeroResizeWait,
    /// Travel speed must be finite and positive
    InvalidSpeed,
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::ZeroScrollInterval => {
                write!(f, "scroll interval must be greater than zero")
            }
            BuildError::ZeroResizeWait => {
                write!(f, "resize wait must be greater than zero")
            }
            BuildError::InvalidSpeed => {
                write!(f, "travel speed must be finite and positive")
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Builder for constructing a [`PageEngine`].
pub struct PageEngineBuilder {
    scroll_interval: Duration,
    resize_wait: Duration,
    speed_mph: f64,
    clock: Option<Arc<dyn Clock>>,
}

impl PageEngineBuilder {
    fn new() -> Self {
        Self {
            scroll_interval: DEFAULT_SCROLL_INTERVAL,
            resize_wait: DEFAULT_RESIZE_WAIT,
            speed_mph: DEFAULT_SPEED_MPH,
            clock: None,
        }
    }

    /// Set the scroll throttle window.
    pub fn with_scroll_interval(mut self, interval: Duration) -> Self {
        self.scroll_interval = interval;
        self
    }

    /// Set the resize debounce quiet period.
    pub fn with_resize_wait(mut self, wait: Duration) -> Self {
        self.resize_wait = wait;
        self
    }

    /// Set the travel speed used by the calculator.
    pub fn with_speed_mph(mut self, speed_mph: f64) -> Self {
        self.speed_mph = speed_mph;
        self
    }

    /// Use a custom clock (e.g. a mock in tests).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the engine, validating the configuration.
    ///
    /// # Errors
    /// Returns a [`BuildError`] for a zero gate window or a non-positive
    /// travel speed.
    pub fn build(self) -> Result<PageEngine, BuildError> {
        if self.scroll_interval.is_zero() {
            return Err(BuildError::ZeroScrollInterval);
        }
        if self.resize_wait.is_zero() {
            return Err(BuildError::ZeroResizeWait);
        }
        if !self.speed_mph.is_finite() || self.speed_mph <= 0.0 {
            return Err(BuildError::InvalidSpeed);
        }

        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock::new()));
        let metrics = EngineMetrics::new();
        debug!(
            scroll_interval_ms = self.scroll_interval.as_millis() as u64,
            resize_wait_ms = self.resize_wait.as_millis() as u64,
            speed_mph = self.speed_mph,
            "page engine built"
        );
        Ok(PageEngine {
            controller: ScrollStateController::new(
                self.scroll_interval,
                self.resize_wait,
                clock,
                metrics.clone(),
            ),
            quiz: QuizEngine::with_metrics(metrics.clone()),
            metrics,
            speed_mph: self.speed_mph,
        })
    }
}

/// Formatted calculator output for one amount, ready to render.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmountSummary {
    /// Tiered money figure, e.g. "$1.0 billion".
    pub money: String,
    /// Tiered distance, e.g. "189,394 miles".
    pub distance: String,
    /// Tiered travel time, e.g. "25 weeks".
    pub travel_time: String,
    /// Speed the travel time assumes, for the "at 45 mph" suffix.
    pub speed_mph: f64,
}

/// The engine a host page drives.
///
/// ```
/// use wealth_mileage::PageEngine;
///
/// let mut engine = PageEngine::new();
/// engine.set_geometry(2000.0, 800.0).unwrap();
///
/// let state = engine.handle_scroll(600.0).unwrap().unwrap();
/// assert_eq!(state.progress_fraction, 0.5);
/// assert!(state.back_to_top_visible);
///
/// let summary = engine.describe_amount(1_000_000_000.0).unwrap();
/// assert_eq!(summary.money, "$1.0 billion");
/// assert_eq!(summary.distance, "189,394 miles");
/// ```
#[derive(Debug)]
pub struct PageEngine {
    controller: ScrollStateController,
    quiz: QuizEngine,
    metrics: EngineMetrics,
    speed_mph: f64,
}

impl PageEngine {
    /// Create an engine with the page defaults.
    pub fn new() -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
        let metrics = EngineMetrics::new();
        Self {
            controller: ScrollStateController::new(
                DEFAULT_SCROLL_INTERVAL,
                DEFAULT_RESIZE_WAIT,
                clock,
                metrics.clone(),
            ),
            quiz: QuizEngine::with_metrics(metrics.clone()),
            metrics,
            speed_mph: DEFAULT_SPEED_MPH,
        }
    }

    /// Start building a customized engine.
    pub fn builder() -> PageEngineBuilder {
        PageEngineBuilder::new()
    }

    /// Set the initial document geometry, bypassing the resize debounce.
    ///
    /// # Errors
    /// Returns [`InvalidInput::Geometry`] for malformed readings.
    pub fn set_geometry(
        &mut self,
        document_height: f64,
        viewport_height: f64,
    ) -> Result<(), InvalidInput> {
        self.controller.set_geometry(document_height, viewport_height)
    }

    /// Feed a scroll sample; `Ok(None)` means the throttle dropped it.
    ///
    /// # Errors
    /// Returns [`InvalidInput::Geometry`] for a malformed position.
    pub fn handle_scroll(&mut self, position: f64) -> Result<Option<PageState>, InvalidInput> {
        self.controller.on_scroll(position)
    }

    /// Feed a resize reading; the geometry swap applies once the debounce
    /// settles and [`poll`](PageEngine::poll) runs.
    ///
    /// # Errors
    /// Returns [`InvalidInput::Geometry`] for malformed readings.
    pub fn handle_resize(
        &mut self,
        document_height: f64,
        viewport_height: f64,
    ) -> Result<(), InvalidInput> {
        self.controller.on_resize(document_height, viewport_height)
    }

    /// Apply any settled geometry update and return the recomputed state.
    pub fn poll(&mut self) -> Option<PageState> {
        self.controller.poll()
    }

    /// Select a quiz answer by key; unknown keys get the fallback result.
    pub fn select_answer(&mut self, key: &str) -> QuizResult {
        self.quiz.select(key)
    }

    /// The currently selected quiz option key, if any.
    pub fn quiz_selection(&self) -> Option<&str> {
        self.quiz.selection()
    }

    /// Convert an amount and return the formatted calculator output.
    ///
    /// # Errors
    /// Returns [`InvalidInput::Amount`] for a negative or non-finite amount.
    pub fn describe_amount(&self, amount: f64) -> Result<AmountSummary, InvalidInput> {
        let miles = to_distance_miles(amount)?;
        let hours = to_duration_hours(miles, self.speed_mph)?;
        Ok(AmountSummary {
            money: format_money(amount),
            distance: format_distance(miles),
            travel_time: format_duration(hours),
            speed_mph: self.speed_mph,
        })
    }

    /// The most recently derived page state.
    pub fn state(&self) -> Option<PageState> {
        self.controller.state()
    }

    /// Deadline of the pending geometry swap, for wakeup scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.controller.next_geometry_deadline()
    }

    /// Engine metrics.
    pub fn metrics(&self) -> &EngineMetrics {
        &self.metrics
    }

    /// A snapshot of the engine metrics.
    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

impl Default for PageEngine {
    fn default() -> Self {
        Self::new()
    }
}
