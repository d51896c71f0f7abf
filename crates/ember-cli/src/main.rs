//! `ember` — terminal streak report for the Ember API.
//!
//! # Usage
//!
//! ```
//! ember 3 --url http://localhost:8080
//! ember 3 --today 2026-08-24 --no-color
//! ```

mod client;
mod render;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use client::{ApiClient, ApiConfig};
use ember_core::CaseId;
use serde::Deserialize;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "ember", about = "Terminal streak report for the Ember API")]
struct Args {
  /// Case identifier to report on.
  case_id: CaseId,

  /// Path to a TOML config file (url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<std::path::PathBuf>,

  /// Base URL of the ember server (default: http://localhost:8080).
  #[arg(long, env = "EMBER_URL")]
  url: Option<String>,

  /// Reference date (YYYY-MM-DD). Defaults to the server's current UTC date.
  #[arg(long)]
  today: Option<NaiveDate>,

  /// Disable ANSI colours in the output.
  #[arg(long)]
  no_color: bool,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override the config file, which overrides the default.
  let api_config = ApiConfig {
    base_url: args
      .url
      .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
      .unwrap_or_else(|| "http://localhost:8080".to_string()),
  };

  let client = ApiClient::new(api_config)?;
  let summary = client.get_streak(args.case_id, args.today).await?;

  print!("{}", render::render(&summary, !args.no_color));

  Ok(())
}
