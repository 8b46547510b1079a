//! Single-choice quiz engine.
//!
//! Wraps the answer table in [`crate::domain::quiz`] with selection state:
//! picking an option replaces whatever was selected before. Selection lives
//! only for the page session; nothing persists.

use crate::application::metrics::EngineMetrics;
use crate::domain::quiz::{result_for, QuizAnswer, QuizResult};
use tracing::debug;

/// Quiz engine holding the current selection.
#[derive(Debug, Default)]
pub struct QuizEngine {
    selected: Option<String>,
    metrics: Option<EngineMetrics>,
}

impl QuizEngine {
    /// Create an engine with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine that records selections to the given metrics.
    pub fn with_metrics(metrics: EngineMetrics) -> Self {
        Self {
            selected: None,
            metrics: Some(metrics),
        }
    }

    /// Select an answer by its markup key and return the result.
    ///
    /// Unknown keys are not an error: they become the current selection (the
    /// page highlights whatever was clicked) and resolve to the fallback
    /// result. Any previous selection is replaced.
    pub fn select(&mut self, key: &str) -> QuizResult {
        let answer = QuizAnswer::from_key(key);
        let result = result_for(answer);
        self.selected = Some(key.to_owned());
        if let Some(metrics) = &self.metrics {
            metrics.record_quiz_selection();
        }
        debug!(key, correct = result.is_correct, "quiz answer selected");
        result
    }

    /// The key of the currently selected option, if any.
    pub fn selection(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The parsed answer for the current selection, if it is a known key.
    pub fn selected_answer(&self) -> Option<QuizAnswer> {
        self.selected.as_deref().and_then(QuizAnswer::from_key)
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}
