//! Integration tests for the activity source backends.

use std::io::Write as _;

use chrono::{Days, NaiveDate};
use ember_core::{ActivityRecord, ActivitySource, DayState, derive_streak};

use crate::{Error, JsonSource, MemorySource};

fn date(s: &str) -> NaiveDate {
  s.parse().expect("test date")
}

fn today() -> NaiveDate {
  date("2026-08-24")
}

// ─── MemorySource ────────────────────────────────────────────────────────────

#[tokio::test]
async fn unknown_case_resolves_to_none() {
  let source = MemorySource::new();
  assert_eq!(source.resolve(42).await.unwrap(), None);
}

#[tokio::test]
async fn known_case_with_no_records_is_some_empty() {
  // "Found but empty" must stay distinguishable from "not found".
  let source = MemorySource::new().with_case(9, vec![]);
  assert_eq!(source.resolve(9).await.unwrap(), Some(vec![]));
  assert_eq!(source.resolve(10).await.unwrap(), None);
}

#[tokio::test]
async fn with_case_replaces_previous_records() {
  let rec = ActivityRecord { date: today(), count: 1 };
  let source = MemorySource::new()
    .with_case(1, vec![rec, rec])
    .with_case(1, vec![rec]);
  assert_eq!(source.resolve(1).await.unwrap().unwrap().len(), 1);
}

#[tokio::test]
async fn demo_covers_cases_one_through_seven() {
  let source = MemorySource::demo(today());
  for case_id in 1..=7 {
    assert!(source.resolve(case_id).await.unwrap().is_some());
  }
  assert!(source.resolve(8).await.unwrap().is_none());
}

#[tokio::test]
async fn demo_case_seven_is_entirely_future_dated() {
  let source = MemorySource::demo(today());
  let records = source.resolve(7).await.unwrap().unwrap();
  assert!(records.iter().all(|r| r.date > today()));
}

#[tokio::test]
async fn demo_case_three_derives_a_saved_yesterday() {
  // End-to-end through the engine: one-day gap closed by a burst.
  let source = MemorySource::demo(today());
  let records = source.resolve(3).await.unwrap().unwrap();
  let summary = derive_streak(today(), &records);

  let yesterday = today() - Days::new(1);
  let day = summary.days.iter().find(|d| d.date == yesterday).unwrap();
  assert_eq!(day.state, DayState::Saved);
  assert_eq!(summary.total, 2);
}

// ─── JsonSource ──────────────────────────────────────────────────────────────

const DATA: &str = r#"
{
  "1": [
    { "date": "2026-08-21", "activities": 1 },
    { "date": "2026-08-24", "activities": 3 }
  ],
  "2": []
}
"#;

#[tokio::test]
async fn json_source_loads_from_a_file() {
  let mut file = tempfile::NamedTempFile::new().unwrap();
  file.write_all(DATA.as_bytes()).unwrap();

  let source = JsonSource::load(file.path()).unwrap();
  assert_eq!(source.len(), 2);

  let records = source.resolve(1).await.unwrap().unwrap();
  assert_eq!(records.len(), 2);
  assert_eq!(records[1].count, 3);

  assert_eq!(source.resolve(2).await.unwrap(), Some(vec![]));
  assert_eq!(source.resolve(3).await.unwrap(), None);
}

#[tokio::test]
async fn json_source_from_reader_feeds_the_engine() {
  let source = JsonSource::from_reader(DATA.as_bytes()).unwrap();
  let records = source.resolve(1).await.unwrap().unwrap();
  let summary = derive_streak(today(), &records);

  // Two missed days after the completion, cleared by a burst of three.
  assert_eq!(summary.days[0].state, DayState::Saved);
  assert_eq!(summary.activities_today, 3);
}

#[test]
fn malformed_json_is_a_json_error() {
  let result = JsonSource::from_reader("{ not json".as_bytes());
  assert!(matches!(result, Err(Error::Json(_))));
}

#[test]
fn missing_file_is_an_io_error() {
  let result = JsonSource::load("/nonexistent/ember-data.json");
  assert!(matches!(result, Err(Error::Io(_))));
}
