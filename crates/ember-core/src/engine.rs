//! The streak-state derivation engine.
//!
//! A pipeline of pure passes over the trailing seven-day window:
//! aggregate raw records, mark completions (fixing the summary total),
//! flag grace days, apply the recovery rules, then normalise. Each pass
//! takes a window by value and returns a new one, so the override
//! priority between passes is explicit and each pass can be tested on
//! its own. Nothing here reads a clock or performs I/O.

use chrono::{Days, NaiveDate};

use crate::day::{ActivityRecord, DayResult, DayState, StreakSummary, WINDOW_DAYS};

/// The reporting window, ordered oldest first (index 0 = today − 6).
type Window = [DayResult; WINDOW_DAYS];

/// Derive the classified seven-day summary for `today` from raw records.
///
/// Deterministic and infallible: an empty record list yields a window of
/// `INCOMPLETE` days with zero totals rather than an error, and records
/// dated before `today − 6` or after `today` contribute nothing.
pub fn derive_streak(today: NaiveDate, records: &[ActivityRecord]) -> StreakSummary {
  let window = aggregate(today, records);
  let (window, total) = mark_completed(window);
  let window = mark_at_risk(window);
  let window = mark_saved(window);
  let window = normalize(window);

  // The window is built oldest-first, so today is always the last entry.
  let activities_today = window[WINDOW_DAYS - 1].activities;

  let mut days = window.to_vec();
  days.reverse();

  StreakSummary { activities_today, total, days }
}

// ─── Passes ──────────────────────────────────────────────────────────────────

/// Pass 1: materialise the window, oldest first, with summed per-date
/// counts. Out-of-window records are silently dropped here.
fn aggregate(today: NaiveDate, records: &[ActivityRecord]) -> Window {
  std::array::from_fn(|i| {
    let date = today - Days::new((WINDOW_DAYS - 1 - i) as u64);
    let activities = records
      .iter()
      .filter(|r| r.date == date)
      .map(|r| r.count)
      .sum();
    DayResult { date, activities, state: DayState::Incomplete }
  })
}

/// Pass 2: mark raw completions and fix the summary total.
///
/// The total counts the days that met the threshold in this pass. The
/// recovery pass may later relabel one of them `SAVED`; the total is
/// deliberately not revisited when that happens.
fn mark_completed(mut window: Window) -> (Window, u32) {
  let mut total = 0;
  for day in &mut window {
    if day.activities >= 1 {
      day.state = DayState::Completed;
      total += 1;
    }
  }
  (window, total)
}

/// Pass 3: a zero-activity day directly after a completed day is in
/// grace, not yet a broken streak.
fn mark_at_risk(mut window: Window) -> Window {
  for i in 1..WINDOW_DAYS {
    if window[i - 1].state == DayState::Completed && window[i].activities == 0 {
      window[i].state = DayState::AtRisk;
    }
  }
  window
}

/// Pass 4: recovery. A burst of ≥ 2 after a one-day gap, or ≥ 3 after a
/// two-day gap, reclassifies the burst day as `SAVED` — even when pass 2
/// already marked it `COMPLETED`. The gap must directly follow a
/// completed day, and the one-day rule wins when both would match.
fn mark_saved(mut window: Window) -> Window {
  for i in 0..WINDOW_DAYS {
    if i >= 2
      && window[i - 2].state == DayState::Completed
      && window[i - 1].activities == 0
      && window[i].activities >= 2
    {
      window[i].state = DayState::Saved;
      continue;
    }

    if i >= 3
      && window[i - 3].state == DayState::Completed
      && window[i - 2].activities == 0
      && window[i - 1].activities == 0
      && window[i].activities >= 3
    {
      window[i].state = DayState::Saved;
    }
  }
  window
}

/// Pass 5: force anything the earlier passes did not positively classify
/// back to `INCOMPLETE`. Redundant with passes 1–4 but makes the state
/// invariant explicit and testable.
fn normalize(mut window: Window) -> Window {
  for day in &mut window {
    if !matches!(
      day.state,
      DayState::Completed | DayState::AtRisk | DayState::Saved
    ) {
      day.state = DayState::Incomplete;
    }
  }
  window
}

// ─── Tests ───────────────────────────────────────────────────────────────────
