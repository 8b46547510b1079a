//! # wealth-mileage
//!
//! Headless engine for "The Mileage of Wealth": the interactive core of the
//! page with no DOM attached. One dollar is one foot of road: the crate
//! converts amounts into distance and travel time, derives scroll-driven UI
//! state behind throttle/debounce rate gates, and runs the page's
//! one-question quiz. A host rendering layer feeds raw events in and paints
//! the derived state out.
//!
//! ## Quick Start
//!
//! ```rust
//! use wealth_mileage::PageEngine;
//!
//! let mut engine = PageEngine::new();
//! engine.set_geometry(2000.0, 800.0).unwrap();
//!
//! // Scroll samples are throttled; the leading sample always passes.
//! let state = engine.handle_scroll(600.0).unwrap().unwrap();
//! assert_eq!(state.progress_fraction, 0.5);
//! assert!(state.back_to_top_visible);
//!
//! // The calculator: how far does the money go?
//! let summary = engine.describe_amount(1_000_000_000.0).unwrap();
//! assert_eq!(summary.money, "$1.0 billion");
//! assert_eq!(summary.distance, "189,394 miles");
//!
//! // The quiz: only "moon" is right.
//! assert!(engine.select_answer("moon").is_correct);
//! ```
//!
//! Or customize the gates and travel speed:
//!
//! ```rust
//! use wealth_mileage::PageEngine;
//! use std::time::Duration;
//!
//! let engine = PageEngine::builder()
//!     .with_scroll_interval(Duration::from_millis(32))
//!     .with_resize_wait(Duration::from_millis(500))
//!     .with_speed_mph(60.0)
//!     .build()
//!     .unwrap();
//! # let _ = engine;
//! ```
//!
//! ## Rate Gates
//!
//! Scroll handling is a leading-edge throttle: the first sample in a window
//! passes immediately, the rest are dropped (never queued), and the window
//! is not extended by drops. Resize handling is a trailing debounce: every
//! reading re-arms a deadline, and the geometry swap applies only after the
//! burst goes quiet.
//!
//! The gates are pure state machines over explicit timestamps, with no
//! timers and no threads. Deferred work surfaces as a deadline the host polls:
//!
//! ```rust,no_run
//! # use wealth_mileage::PageEngine;
//! # let mut engine = PageEngine::new();
//! engine.handle_resize(2400.0, 800.0).unwrap();
//! if let Some(deadline) = engine.next_deadline() {
//!     // Schedule a wakeup, then:
//!     let _ = deadline;
//! }
//! let recomputed = engine.poll();
//! # let _ = recomputed;
//! ```
//!
//! Wrapped-function variants ([`Throttled`], [`Debounced`]) are available
//! when a callback API fits the host better than explicit state.
//!
//! ## Determinism
//!
//! Every derivation is a pure function of its inputs. Time enters only
//! through the [`Clock`] port, so tests drive the gates with `MockClock`
//! (under the `test-helpers` feature or in test builds) instead of sleeping.
//!
//! ## Errors
//!
//! Inputs are validated at the boundary: negative, NaN, or infinite amounts,
//! non-positive speeds, and malformed scroll geometry return
//! [`InvalidInput`] rather than being coerced. All failures are recoverable
//! by re-invoking with corrected input. An unknown quiz key is not an error;
//! it resolves to the fallback result.
//!
//! ## Observability
//!
//! The engine logs per-sample decisions at `trace` and state transitions at
//! `debug` via `tracing`, and keeps counters you can read at any time:
//!
//! ```rust
//! # use wealth_mileage::PageEngine;
//! # let mut engine = PageEngine::new();
//! # engine.set_geometry(1000.0, 500.0).unwrap();
//! # engine.handle_scroll(10.0).unwrap();
//! # engine.handle_scroll(20.0).unwrap();
//! let snapshot = engine.metrics_snapshot();
//! println!("dropped {:.0}%", snapshot.drop_rate() * 100.0);
//! ```
//!
//! No subscriber is installed by the library.

// Domain layer - pure business logic
pub mod domain;

// Application layer - orchestration
pub mod application;

// Infrastructure layer - external adapters
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::{
    convert::{
        fraction_of_moon_distance, to_distance_miles, to_duration_hours, DEFAULT_SPEED_MPH,
        FEET_PER_MILE, MOON_DISTANCE_MILES,
    },
    error::InvalidInput,
    format::{format_distance, format_duration, format_money},
    gate::{Debounce, GateDecision, RateGate, Throttle},
    quiz::{QuizAnswer, QuizResult, ResultTone},
    scroll::{back_to_top_visible, HeaderTier, ScrollState},
};

pub use application::{
    controller::{PageState, ScrollStateController},
    limiter::{Debounced, Throttled},
    metrics::{EngineMetrics, MetricsSnapshot},
    ports::Clock,
    quiz::QuizEngine,
};

pub use infrastructure::{
    clock::SystemClock,
    page::{AmountSummary, BuildError, PageEngine, PageEngineBuilder},
};
