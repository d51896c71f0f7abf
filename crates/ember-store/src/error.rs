//! Error type for `ember-store`.
//!
//! Lookups themselves are infallible; these are the ways loading a JSON
//! data file can go wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("malformed activity data: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
