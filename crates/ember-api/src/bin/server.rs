//! Ember API server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), selects
//! an activity source — a JSON data file when `data_path` is set, the
//! built-in demonstration cases otherwise — and serves the streak API
//! over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use chrono::Utc;
use clap::Parser;
use ember_store::{JsonSource, MemorySource};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Ember streak API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

/// Runtime server configuration, deserialised from `config.toml` and
/// `EMBER_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
struct ServerConfig {
  #[serde(default = "default_host")]
  host:      String,
  #[serde(default = "default_port")]
  port:      u16,
  /// JSON activity data file. When absent the server falls back to the
  /// built-in demonstration cases.
  #[serde(default)]
  data_path: Option<PathBuf>,
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  8080
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("EMBER"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Select the activity source.
  let app = match &server_cfg.data_path {
    Some(path) => {
      tracing::info!("serving activity data from {}", path.display());
      let source = JsonSource::load(path)
        .with_context(|| format!("failed to load activity data from {}", path.display()))?;
      ember_api::api_router(Arc::new(source))
    }
    None => {
      tracing::info!("no data_path configured; serving built-in demo cases");
      let source = MemorySource::demo(Utc::now().date_naive());
      ember_api::api_router(Arc::new(source))
    }
  };
  let app = app.layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
