//! [`MemorySource`] — a `HashMap`-backed activity table.

use std::{collections::HashMap, convert::Infallible};

use chrono::{Days, NaiveDate};
use ember_core::{ActivityRecord, ActivitySource, CaseId};

/// An in-memory [`ActivitySource`], used for demos and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
  cases: HashMap<CaseId, Vec<ActivityRecord>>,
}

impl MemorySource {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder-style insert; replaces any previous records for `case_id`.
  pub fn with_case(mut self, case_id: CaseId, records: Vec<ActivityRecord>) -> Self {
    self.cases.insert(case_id, records);
    self
  }

  /// The seven demonstration cases, with every date computed relative to
  /// the supplied `today`:
  ///
  /// 1. a completion three days back and a three-activity burst today
  /// 2. a two-day run that lapsed, plus a single activity today
  /// 3. a one-day gap closed by a three-activity burst yesterday
  /// 4. a single completion two days back, nothing since
  /// 5. explicit zero-count records ahead of one old completion
  /// 6. a two-day gap closed by a three-activity burst
  /// 7. a single future-dated record, which contributes to nothing
  pub fn demo(today: NaiveDate) -> Self {
    let ago = |n: u64| today - Days::new(n);
    let rec = |date: NaiveDate, count: u32| ActivityRecord { date, count };

    Self::new()
      .with_case(1, vec![rec(ago(3), 1), rec(today, 3)])
      .with_case(2, vec![rec(ago(4), 1), rec(ago(3), 1), rec(today, 1)])
      .with_case(3, vec![rec(ago(4), 1), rec(ago(1), 3)])
      .with_case(4, vec![rec(ago(2), 1)])
      .with_case(5, vec![rec(ago(6), 0), rec(ago(5), 0), rec(ago(4), 1)])
      .with_case(6, vec![rec(ago(3), 3), rec(ago(6), 1)])
      .with_case(7, vec![rec(today + Days::new(1), 10)])
  }
}

impl ActivitySource for MemorySource {
  type Error = Infallible;

  async fn resolve(
    &self,
    case_id: CaseId,
  ) -> Result<Option<Vec<ActivityRecord>>, Infallible> {
    Ok(self.cases.get(&case_id).cloned())
  }
}
