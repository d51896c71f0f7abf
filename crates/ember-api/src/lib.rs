//! JSON REST API for Ember.
//!
//! Exposes an axum [`Router`] backed by any [`ember_core::ActivitySource`].
//! Auth, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(ember_api::api_router(source.clone()))
//! ```

pub mod error;
pub mod streaks;

use std::sync::Arc;

use axum::{Router, routing::get};
use ember_core::ActivitySource;

pub use error::ApiError;

/// Build a fully-materialised API router for `source`.
///
/// The returned `Router<()>` can be nested into any parent router
/// regardless of its own state type.
pub fn api_router<S>(source: Arc<S>) -> Router<()>
where
  S: ActivitySource + 'static,
{
  Router::new()
    .route("/streaks/{case_id}", get(streaks::get_streak::<S>))
    .with_state(source)
}
