//! Activity source backends for Ember.
//!
//! Two implementations of [`ember_core::ActivitySource`]: an in-memory
//! fixture table and a JSON-file store. Neither persists anything the
//! engine writes — the streak system recomputes from a full activity
//! snapshot on every request.

mod json;
mod memory;

pub mod error;

pub use error::{Error, Result};
pub use json::JsonSource;
pub use memory::MemorySource;

#[cfg(test)]
mod tests;
