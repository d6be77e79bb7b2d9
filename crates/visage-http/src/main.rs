//! visage-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the
//! SQLite identity slot, restores any persisted session, and serves the
//! JSON API.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
  time::Duration,
};

use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use visage_http::{AppState, ServerConfig};
use visage_slot_sqlite::SqliteSlot;
use visage_store::{MockClassifier, ResultStore, SessionStore, TracingNotifier};

#[derive(Parser)]
#[command(author, version, about = "Visage emotion-demo server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
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
    .add_source(config::Environment::with_prefix("VISAGE"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Open the durable identity slot.
  let slot_path = expand_tilde(&server_cfg.slot_path);
  let slot = SqliteSlot::open(&slot_path)
    .await
    .with_context(|| format!("failed to open identity slot at {slot_path:?}"))?;

  // Build the store pair.
  let notifier = Arc::new(TracingNotifier);
  let session = SessionStore::new(slot)
    .with_latency(Duration::from_millis(server_cfg.login_latency_ms))
    .with_notifier(notifier.clone());
  let results = ResultStore::new(
    MockClassifier::new()
      .with_latency(Duration::from_millis(server_cfg.analyze_latency_ms)),
  )
  .with_notifier(notifier);

  // Process-start hook: rehydrate the last-known identity, if any.
  match session.restore().await {
    Some(identity) => {
      tracing::info!(email = %identity.email, "restored persisted session");
    }
    None => tracing::info!("starting unauthenticated"),
  }

  let state = AppState {
    session: Arc::new(session),
    results: Arc::new(results),
  };

  let app = visage_http::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
