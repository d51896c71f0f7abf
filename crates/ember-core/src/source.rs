//! The `ActivitySource` trait — the engine's one external collaborator.
//!
//! The trait is implemented by lookup backends (e.g. `ember-store`).
//! Transport layers depend on this abstraction, not on any concrete
//! backend.

use std::future::Future;

use crate::day::{ActivityRecord, CaseId};

/// Abstraction over whatever resolves a case to its raw activity log.
///
/// `Ok(None)` means the identifier is not recognised; `Ok(Some(vec![]))`
/// is a known case with nothing logged — callers must keep the two
/// apart. The engine tolerates unsorted records, duplicate dates, and
/// out-of-window dates, so implementations need not tidy their output.
///
/// The method returns a `Send` future so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ActivitySource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Look up the raw activity records for `case_id`.
  fn resolve(
    &self,
    case_id: CaseId,
  ) -> impl Future<Output = Result<Option<Vec<ActivityRecord>>, Self::Error>> + Send + '_;
}
