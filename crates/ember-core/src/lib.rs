//! Core types and the streak derivation engine for Ember.
//!
//! This crate is deliberately free of HTTP and storage dependencies.
//! All other crates depend on it; it depends on nothing but chrono,
//! serde, and thiserror.

pub mod day;
pub mod engine;
pub mod error;
pub mod source;

pub use day::{ActivityRecord, CaseId, DayResult, DayState, StreakSummary, WINDOW_DAYS};
pub use engine::derive_streak;
pub use error::{Error, Result};
pub use source::ActivitySource;
