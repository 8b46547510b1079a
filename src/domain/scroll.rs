//! Scroll-position derivations.
//!
//! Pure functions from a scroll geometry sample to the page's derived UI
//! state: progress fraction, back-to-top visibility, and header style tier.

use crate::domain::error::InvalidInput;

/// Scroll offset above which the back-to-top button shows, in pixels.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

/// Scroll offset above which the header switches to its compact tier.
pub const HEADER_COMPACT_THRESHOLD_PX: f64 = 100.0;

/// A validated scroll geometry sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Pixels scrolled from the top of the document.
    pub position: f64,
    /// Full document height in pixels.
    pub document_height: f64,
    /// Visible viewport height in pixels.
    pub viewport_height: f64,
}

impl ScrollState {
    /// Create a validated scroll state.
    ///
    /// # Errors
    /// Returns [`InvalidInput::Geometry`] if any reading is negative, NaN,
    /// or infinite.
    pub fn new(
        position: f64,
        document_height: f64,
        viewport_height: f64,
    ) -> Result<Self, InvalidInput> {
        for reading in [position, document_height, viewport_height] {
            if !reading.is_finite() || reading < 0.0 {
                return Err(InvalidInput::Geometry);
            }
        }
        Ok(Self {
            position,
            document_height,
            viewport_height,
        })
    }

    /// How far the viewport has scrolled through the document, in [0, 1].
    ///
    /// A document no taller than the viewport has nothing to scroll and
    /// reports 0 rather than dividing by zero.
    pub fn progress_fraction(&self) -> f64 {
        let scrollable = self.document_height - self.viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.position / scrollable).clamp(0.0, 1.0)
    }
}

/// Whether the back-to-top button is visible at the given scroll offset.
pub fn back_to_top_visible(position: f64) -> bool {
    position > BACK_TO_TOP_THRESHOLD_PX
}

/// Header style tier, driven by scroll position.
///
/// Two states, no hysteresis: the tier is re-derived on every sample, so a
/// scroll hovering at the threshold may toggle repeatedly. That matches the
/// page's behavior and is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderTier {
    /// At or near the top of the page.
    Default,
    /// Scrolled past the threshold: darker, more blurred backdrop.
    Compact,
}

impl HeaderTier {
    /// Derive the tier for a scroll offset.
    pub fn for_position(position: f64) -> Self {
        if position > HEADER_COMPACT_THRESHOLD_PX {
            HeaderTier::Compact
        } else {
            HeaderTier::Default
        }
    }

    /// Check if this is the compact tier.
    pub fn is_compact(&self) -> bool {
        matches!(self, HeaderTier::Compact)
    }
}
