//! Handler for the `/streaks` endpoint.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/streaks/:case_id` | Optional `?today=YYYY-MM-DD`; 404 for unknown cases |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use chrono::{NaiveDate, Utc};
use ember_core::{ActivitySource, CaseId, StreakSummary, derive_streak};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct StreakParams {
  /// Reference date for the reporting window. Defaults to the current
  /// UTC date; fixing it makes responses reproducible.
  pub today: Option<NaiveDate>,
}

/// `GET /streaks/:case_id[?today=YYYY-MM-DD]`
pub async fn get_streak<S>(
  State(source): State<Arc<S>>,
  Path(case_id): Path<CaseId>,
  Query(params): Query<StreakParams>,
) -> Result<Json<StreakSummary>, ApiError>
where
  S: ActivitySource,
{
  let records = source
    .resolve(case_id)
    .await
    .map_err(|e| ApiError::Source(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("case {case_id} not found")))?;

  let today = params.today.unwrap_or_else(|| Utc::now().date_naive());
  Ok(Json(derive_streak(today, &records)))
}
