//! Day-level streak types — the engine's input and output contract.
//!
//! The wire spellings (`activities`, `activitiesToday`, `AT_RISK`, …)
//! are fixed by the JSON API and must not drift.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier for a tracked case. Assigned externally; small integers.
pub type CaseId = u32;

/// Number of days in the reporting window: today plus the six before it.
pub const WINDOW_DAYS: usize = 7;

// ─── Input ───────────────────────────────────────────────────────────────────

/// One raw logged activity entry for a case.
///
/// Several records may share a date (aggregation sums their counts), and
/// records dated outside the reporting window are ignored rather than
/// rejected. Zero is a valid count — logged but idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
  pub date:  NaiveDate,
  #[serde(rename = "activities")]
  pub count: u32,
}

// ─── Output ──────────────────────────────────────────────────────────────────

/// Classification of a single window day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayState {
  /// At least one activity was logged.
  Completed,
  /// No activity, and no grace or recovery rule applied.
  Incomplete,
  /// The first zero-activity day directly after a completed day — still
  /// in grace, not yet a broken streak.
  AtRisk,
  /// A catch-up day whose burst cleared a one- or two-day gap.
  Saved,
}

/// One fully classified day of the reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayResult {
  pub date:       NaiveDate,
  /// Aggregated activity count for `date`.
  pub activities: u32,
  pub state:      DayState,
}

/// The engine's sole output: a classified seven-day window plus totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
  /// Aggregated activity count for the reference day itself.
  pub activities_today: u32,
  /// Count of window days that met the raw completion threshold
  /// (activities ≥ 1) when first classified. A later SAVED override
  /// never lowers this.
  pub total:            u32,
  /// Exactly [`WINDOW_DAYS`] entries, newest first.
  pub days:             Vec<DayResult>,
}
