//! Terminal rendering of a streak summary.
//!
//! Mirrors the web presentation: day bubbles in oldest → newest visual
//! order with per-state styling, an underline beneath today, and the
//! headline totals. Pure string assembly, so it is testable without a
//! terminal.

use crossterm::style::Stylize as _;
use ember_core::{DayResult, DayState, StreakSummary};

/// Column width of one day cell, in characters.
const CELL: usize = 5;

/// Render `summary` as a multi-line report. `color` toggles ANSI styling.
pub fn render(summary: &StreakSummary, color: bool) -> String {
  // `days` arrives newest first; the visual order is oldest → newest,
  // which puts today in the rightmost column.
  let days: Vec<&DayResult> = summary.days.iter().rev().collect();

  let bubbles = days
    .iter()
    .map(|d| paint(&centred(marker(d.state)), d.state, color))
    .collect::<Vec<_>>()
    .join("");

  let labels = days
    .iter()
    .map(|d| centred(&d.date.format("%a").to_string().to_uppercase()))
    .collect::<Vec<_>>()
    .join("");

  // Underline the rightmost (today) column only.
  let mut underline = " ".repeat(CELL * days.len().saturating_sub(1));
  underline.push_str(&centred("‾‾‾"));

  format!(
    "{bubbles}\n{labels}\n{underline}\nYour streak is {} days ({} activities today)\n",
    summary.total, summary.activities_today
  )
}

fn marker(state: DayState) -> &'static str {
  match state {
    DayState::Completed => "●",
    DayState::Saved => "◆",
    DayState::AtRisk => "◐",
    DayState::Incomplete => "○",
  }
}

fn paint(text: &str, state: DayState, color: bool) -> String {
  if !color {
    return text.to_string();
  }
  match state {
    DayState::Completed => text.green().to_string(),
    DayState::Saved => text.blue().to_string(),
    DayState::AtRisk => text.yellow().to_string(),
    DayState::Incomplete => text.dim().to_string(),
  }
}

/// Centre `text` in a fixed-width cell, counting characters not bytes.
fn centred(text: &str) -> String {
  let len = text.chars().count().min(CELL);
  let pad = CELL - len;
  let left = pad / 2;
  format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

#[cfg(test)]
mod tests {
  use chrono::{Days, NaiveDate};
  use ember_core::{ActivityRecord, derive_streak};

  use super::*;

  /// Completed four days back, a saving burst two days back.
  fn summary() -> StreakSummary {
    let today: NaiveDate = "2026-08-24".parse().unwrap();
    let rec =
      |n: u64, count| ActivityRecord { date: today - Days::new(n), count };
    derive_streak(today, &[rec(4, 1), rec(2, 3)])
  }

  #[test]
  fn bubbles_run_oldest_to_newest() {
    let out = render(&summary(), false);
    let bubbles: String = out.lines().next().unwrap().split_whitespace().collect();
    assert_eq!(bubbles, "○○●◐◆◐○");
  }

  #[test]
  fn labels_end_with_todays_weekday() {
    let out = render(&summary(), false);
    let labels = out.lines().nth(1).unwrap();
    assert_eq!(labels.split_whitespace().count(), 7);
    assert!(labels.trim_end().ends_with("MON"));
  }

  #[test]
  fn underline_sits_beneath_the_rightmost_cell() {
    let out = render(&summary(), false);
    let underline = out.lines().nth(2).unwrap();
    assert!(underline.starts_with(&" ".repeat(CELL * 6)));
    assert!(underline.contains("‾‾‾"));
  }

  #[test]
  fn headline_reports_totals() {
    let out = render(&summary(), false);
    assert!(out.ends_with("Your streak is 2 days (0 activities today)\n"));
  }

  #[test]
  fn colored_output_carries_ansi_sequences() {
    assert!(render(&summary(), true).contains('\u{1b}'));
    assert!(!render(&summary(), false).contains('\u{1b}'));
  }
}
