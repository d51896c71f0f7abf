//! Error types for `ember-core`.
//!
//! The engine itself is infallible; this type names the one domain
//! error the surrounding crates share.

use thiserror::Error;

use crate::day::CaseId;

#[derive(Debug, Error)]
pub enum Error {
  /// The activity source does not recognise the case identifier.
  /// Distinct from a known case with an empty activity log.
  #[error("case {0} not found")]
  CaseNotFound(CaseId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
