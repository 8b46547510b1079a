//! Scroll-driven UI state controller.
//!
//! Consumes raw scroll-position and document-geometry samples, applies the
//! rate gates (throttled scroll, debounced resize), and derives the page's
//! UI state as a pure function of position.

use crate::application::metrics::EngineMetrics;
use crate::application::ports::Clock;
use crate::domain::error::InvalidInput;
use crate::domain::gate::{Debounce, RateGate, Throttle};
use crate::domain::scroll::{back_to_top_visible, HeaderTier, ScrollState};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Derived UI state for one scroll sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageState {
    /// How far the page has scrolled, in [0, 1]. Drives the progress bar.
    pub progress_fraction: f64,
    /// Whether the back-to-top button should show.
    pub back_to_top_visible: bool,
    /// Header style tier.
    pub header_tier: HeaderTier,
}

impl PageState {
    fn derive(state: &ScrollState) -> Self {
        Self {
            progress_fraction: state.progress_fraction(),
            back_to_top_visible: back_to_top_visible(state.position),
            header_tier: HeaderTier::for_position(state.position),
        }
    }
}

/// Controller deriving [`PageState`] from rate-limited scroll signals.
///
/// Scroll samples pass through a leading-edge throttle so state is recomputed
/// at most once per interval. Resize readings pass through a trailing
/// debounce so the geometry swap happens once per resize burst, applied by
/// [`poll`](ScrollStateController::poll).
#[derive(Debug)]
pub struct ScrollStateController {
    scroll_gate: Throttle,
    resize_gate: Debounce,
    pending_geometry: Option<(f64, f64)>,
    position: f64,
    document_height: f64,
    viewport_height: f64,
    last_state: Option<PageState>,
    clock: Arc<dyn Clock>,
    metrics: EngineMetrics,
}

impl ScrollStateController {
    /// Create a controller with the given gate windows.
    pub fn new(
        scroll_interval: Duration,
        resize_wait: Duration,
        clock: Arc<dyn Clock>,
        metrics: EngineMetrics,
    ) -> Self {
        Self {
            scroll_gate: Throttle::new(scroll_interval),
            resize_gate: Debounce::new(resize_wait),
            pending_geometry: None,
            position: 0.0,
            document_height: 0.0,
            viewport_height: 0.0,
            last_state: None,
            clock,
            metrics,
        }
    }

    /// Set the document geometry immediately, bypassing the resize debounce.
    ///
    /// Used for the initial measurement before any events flow.
    ///
    /// # Errors
    /// Returns [`InvalidInput::Geometry`] for non-finite or negative readings.
    pub fn set_geometry(
        &mut self,
        document_height: f64,
        viewport_height: f64,
    ) -> Result<(), InvalidInput> {
        // Validate through the same constructor the sampling path uses.
        ScrollState::new(self.position, document_height, viewport_height)?;
        self.document_height = document_height;
        self.viewport_height = viewport_height;
        Ok(())
    }

    /// Feed a scroll-position sample.
    ///
    /// Returns `Ok(None)` when the throttle drops the sample, `Ok(Some(..))`
    /// with freshly derived state when it passes.
    ///
    /// # Errors
    /// Returns [`InvalidInput::Geometry`] for a non-finite or negative
    /// position. Rejected samples do not consume the throttle window.
    pub fn on_scroll(&mut self, position: f64) -> Result<Option<PageState>, InvalidInput> {
        let state = ScrollState::new(position, self.document_height, self.viewport_height)?;

        if self.scroll_gate.on_event(self.clock.now()).is_drop() {
            self.metrics.record_dropped();
            trace!(position, "scroll sample dropped by throttle");
            return Ok(None);
        }

        self.position = position;
        let derived = PageState::derive(&state);
        self.metrics.record_admitted();
        if self.last_state.map(|s| s.header_tier) != Some(derived.header_tier) {
            debug!(tier = ?derived.header_tier, position, "header tier changed");
        }
        self.last_state = Some(derived);
        Ok(Some(derived))
    }

    /// Feed a resize reading. The geometry swap is debounced; call
    /// [`poll`](ScrollStateController::poll) to apply it once it settles.
    ///
    /// # Errors
    /// Returns [`InvalidInput::Geometry`] for non-finite or negative readings.
    pub fn on_resize(
        &mut self,
        document_height: f64,
        viewport_height: f64,
    ) -> Result<(), InvalidInput> {
        ScrollState::new(self.position, document_height, viewport_height)?;
        self.pending_geometry = Some((document_height, viewport_height));
        self.resize_gate.on_event(self.clock.now());
        Ok(())
    }

    /// Apply a settled geometry update, if any, and return the recomputed
    /// state.
    ///
    /// Returns `None` while no resize burst has settled.
    pub fn poll(&mut self) -> Option<PageState> {
        if self.resize_gate.fire_due(self.clock.now()).is_drop() {
            return None;
        }
        let (document_height, viewport_height) = self.pending_geometry.take()?;
        self.document_height = document_height;
        self.viewport_height = viewport_height;
        self.metrics.record_geometry_update();
        debug!(document_height, viewport_height, "geometry recalculated");

        // Geometry validated on the way in; position is the last admitted one.
        let state = ScrollState {
            position: self.position,
            document_height,
            viewport_height,
        };
        let derived = PageState::derive(&state);
        self.last_state = Some(derived);
        Some(derived)
    }

    /// The most recently derived state, if any sample has been admitted.
    pub fn state(&self) -> Option<PageState> {
        self.last_state
    }

    /// The last admitted scroll position.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Deadline of the pending geometry swap, for host wakeup scheduling.
    pub fn next_geometry_deadline(&self) -> Option<Instant> {
        self.resize_gate.next_deadline()
    }
}
