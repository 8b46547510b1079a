//! Application layer - orchestration of domain logic.
//!
//! This layer coordinates the domain logic and manages the runtime behavior:
//! - Scroll state controller (rate-limited sampling and derivation)
//! - Quiz engine (single-choice selection)
//! - Rate-limited closure wrappers (throttled/debounced functions)
//! - Engine metrics
//!
//! ## Ports
//!
//! The application layer defines ports (traits) that infrastructure
//! adapters must implement. This keeps the application layer independent
//! from infrastructure details.

pub mod controller;
pub mod limiter;
pub mod metrics;
pub mod ports;
pub mod quiz;
