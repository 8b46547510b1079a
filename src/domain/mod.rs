//! Domain layer - pure business logic with no external dependencies.
//!
//! This layer contains the core concepts and invariants of the engine:
//! - Wealth-to-distance conversion math and its constants
//! - Tiered formatters for money, distance, and travel time
//! - Scroll-position derivations (progress, visibility, header tier)
//! - Rate-gate state machines (throttle, debounce)
//! - The quiz answer table
//!
//! All types in this layer are pure and easily testable.

pub mod convert;
pub mod error;
pub mod format;
pub mod gate;
pub mod quiz;
pub mod scroll;
