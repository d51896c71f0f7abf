//! Async HTTP client wrapping the ember streak API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use ember_core::{CaseId, Error as CoreError, StreakSummary};
use reqwest::{Client, StatusCode};

/// Connection settings for the ember API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Async HTTP client for the ember JSON API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(10))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{path}", self.config.base_url.trim_end_matches('/'))
  }

  /// `GET /streaks/{case_id}[?today=YYYY-MM-DD]`
  ///
  /// A 404 surfaces as [`ember_core::Error::CaseNotFound`] so the caller
  /// can tell an unknown case apart from transport failures.
  pub async fn get_streak(
    &self,
    case_id: CaseId,
    today: Option<NaiveDate>,
  ) -> Result<StreakSummary> {
    let mut request = self.client.get(self.url(&format!("/streaks/{case_id}")));
    if let Some(today) = today {
      request = request.query(&[("today", today.to_string())]);
    }
    let response = request
      .send()
      .await
      .with_context(|| format!("GET /streaks/{case_id} failed"))?;

    match response.status() {
      StatusCode::NOT_FOUND => Err(CoreError::CaseNotFound(case_id).into()),
      status if !status.is_success() => {
        Err(anyhow!("GET /streaks/{case_id} → {status}"))
      }
      _ => response.json().await.context("deserialising streak summary"),
    }
  }
}
