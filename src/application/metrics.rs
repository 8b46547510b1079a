//! Observability metrics for the page engine.
//!
//! Provides counters for scroll sampling and quiz activity, for monitoring
//! and debugging the host integration.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics tracking engine activity.
///
/// All metrics use atomic operations for thread-safe updates and reads.
/// Clones share the same underlying counters.
#[derive(Debug, Clone)]
pub struct EngineMetrics {
    inner: Arc<MetricsInner>,
}

#[derive(Debug)]
struct MetricsInner {
    /// Scroll samples admitted through the throttle
    samples_admitted: AtomicU64,
    /// Scroll samples dropped by the throttle
    samples_dropped: AtomicU64,
    /// Geometry recalculations applied after a debounce settled
    geometry_updates: AtomicU64,
    /// Quiz answer selections
    quiz_selections: AtomicU64,
}

impl EngineMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                samples_admitted: AtomicU64::new(0),
                samples_dropped: AtomicU64::new(0),
                geometry_updates: AtomicU64::new(0),
                quiz_selections: AtomicU64::new(0),
            }),
        }
    }

    /// Record an admitted scroll sample.
    pub(crate) fn record_admitted(&self) {
        self.inner.samples_admitted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a scroll sample dropped by the throttle.
    pub(crate) fn record_dropped(&self) {
        self.inner.samples_dropped.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an applied geometry recalculation.
    pub(crate) fn record_geometry_update(&self) {
        self.inner.geometry_updates.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a quiz selection.
    pub(crate) fn record_quiz_selection(&self) {
        self.inner.quiz_selections.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the total number of admitted scroll samples.
    pub fn samples_admitted(&self) -> u64 {
        self.inner.samples_admitted.load(Ordering::Relaxed)
    }

    /// Get the total number of throttle-dropped scroll samples.
    pub fn samples_dropped(&self) -> u64 {
        self.inner.samples_dropped.load(Ordering::Relaxed)
    }

    /// Get the total number of applied geometry updates.
    pub fn geometry_updates(&self) -> u64 {
        self.inner.geometry_updates.load(Ordering::Relaxed)
    }

    /// Get the total number of quiz selections.
    pub fn quiz_selections(&self) -> u64 {
        self.inner.quiz_selections.load(Ordering::Relaxed)
    }

    /// Get a snapshot of all metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            samples_admitted: self.samples_admitted(),
            samples_dropped: self.samples_dropped(),
            geometry_updates: self.geometry_updates(),
            quiz_selections: self.quiz_selections(),
        }
    }

    /// Reset all metrics to zero.
    ///
    /// Useful for testing or when starting a new monitoring period.
    pub fn reset(&self) {
        self.inner.samples_admitted.store(0, Ordering::Relaxed);
        self.inner.samples_dropped.store(0, Ordering::Relaxed);
        self.inner.geometry_updates.store(0, Ordering::Relaxed);
        self.inner.quiz_selections.store(0, Ordering::Relaxed);
    }
}

impl Default for EngineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MetricsSnapshot {
    /// Scroll samples admitted through the throttle
    pub samples_admitted: u64,
    /// Scroll samples dropped by the throttle
    pub samples_dropped: u64,
    /// Geometry recalculations applied
    pub geometry_updates: u64,
    /// Quiz answer selections
    pub quiz_selections: u64,
}

impl MetricsSnapshot {
    /// Ratio of dropped samples to total samples (0.0 to 1.0).
    ///
    /// Returns 0.0 if no samples have been processed.
    pub fn drop_rate(&self) -> f64 {
        let total = self.total_samples();
        if total == 0 {
            0.0
        } else {
            self.samples_dropped as f64 / total as f64
        }
    }

    /// Total scroll samples seen (admitted + dropped).
    pub fn total_samples(&self) -> u64 {
        self.samples_admitted.saturating_add(self.samples_dropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_initial_state() {
        let metrics = EngineMetrics::new();
        assert_eq!(metrics.samples_admitted(), 0);
        assert_eq!(metrics.samples_dropped(), 0);
        assert_eq!(metrics.geometry_updates(), 0);
        assert_eq!(metrics.quiz_selections(), 0);
    }

    #[test]
    fn test_record_counters() {
        let metrics = EngineMetrics::new();
        metrics.record_admitted();
        metrics.record_admitted();
        metrics.record_dropped();
        metrics.record_geometry_update();
        metrics.record_quiz_selection();

        assert_eq!(metrics.samples_admitted(), 2);
        assert_eq!(metrics.samples_dropped(), 1);
        assert_eq!(metrics.geometry_updates(), 1);
        assert_eq!(metrics.quiz_selections(), 1);
    }

    #[test]
    fn test_snapshot_drop_rate() {
        let metrics = EngineMetrics::new();

        // No samples - rate should be 0
        assert_eq!(metrics.snapshot().drop_rate(), 0.0);

        metrics.record_admitted();
        assert_eq!(metrics.snapshot().drop_rate(), 0.0);

        metrics.record_dropped();
        assert!((metrics.snapshot().drop_rate() - 0.5).abs() < f64::EPSILON);

        metrics.record_dropped();
        metrics.record_dropped();
        assert!((metrics.snapshot().drop_rate() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snapshot_total_samples() {
        let metrics = EngineMetrics::new();
        metrics.record_admitted();
        metrics.record_admitted();
        metrics.record_dropped();
        assert_eq!(metrics.snapshot().total_samples(), 3);
    }

    #[test]
    fn test_reset() {
        let metrics = EngineMetrics::new();
        metrics.record_admitted();
        metrics.record_dropped();
        metrics.record_quiz_selection();

        metrics.reset();
        assert_eq!(metrics.snapshot().total_samples(), 0);
        assert_eq!(metrics.quiz_selections(), 0);
    }

    #[test]
    fn test_metrics_clone_shares_counters() {
        let metrics1 = EngineMetrics::new();
        metrics1.record_admitted();

        let metrics2 = metrics1.clone();
        metrics2.record_admitted();

        assert_eq!(metrics1.samples_admitted(), 2);
        assert_eq!(metrics2.samples_admitted(), 2);
    }
}
