//! [`JsonSource`] — an activity table loaded from a JSON document.
//!
//! Format: one object keyed by case id, each value a record list:
//!
//! ```json
//! { "1": [ { "date": "2026-08-20", "activities": 2 } ] }
//! ```

use std::{collections::HashMap, convert::Infallible, io::Read, path::Path};

use ember_core::{ActivityRecord, ActivitySource, CaseId};

use crate::error::Result;

/// A read-only [`ActivitySource`] backed by a JSON file loaded up front.
/// Lookups never touch the filesystem again after [`JsonSource::load`].
#[derive(Debug, Clone)]
pub struct JsonSource {
  cases: HashMap<CaseId, Vec<ActivityRecord>>,
}

impl JsonSource {
  /// Load and parse the data file at `path`.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let raw = std::fs::read_to_string(path)?;
    Ok(Self { cases: serde_json::from_str(&raw)? })
  }

  /// Parse a data document from any reader.
  pub fn from_reader(reader: impl Read) -> Result<Self> {
    Ok(Self { cases: serde_json::from_reader(reader)? })
  }

  /// Number of cases in the loaded table.
  pub fn len(&self) -> usize {
    self.cases.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cases.is_empty()
  }
}

impl ActivitySource for JsonSource {
  type Error = Infallible;

  async fn resolve(
    &self,
    case_id: CaseId,
  ) -> Result<Option<Vec<ActivityRecord>>, Infallible> {
    Ok(self.cases.get(&case_id).cloned())
  }
}
