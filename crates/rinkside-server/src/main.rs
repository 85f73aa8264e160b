//! rinkside server binary.
//!
//! Reads `rinkside.toml` (or the path given with `--config`), seeds the
//! in-memory stores, and serves the JSON API under `/api`.
//!
//! ```
//! cargo run -p rinkside-server -- --config rinkside.toml --port 8080
//! ```

mod settings;

use std::path::PathBuf;

use anyhow::Context as _;
use axum::Router;
use clap::Parser;
use rinkside_api::AppState;
use rinkside_notify::Dispatcher;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Rinkside dashboard and contact API")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "rinkside.toml")]
  config: PathBuf,

  /// Override the configured listen host.
  #[arg(long, env = "RINKSIDE_HOST")]
  host: Option<String>,

  /// Override the configured listen port.
  #[arg(long, env = "RINKSIDE_PORT")]
  port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let mut cfg = settings::load(&cli.config)?;
  if let Some(host) = cli.host {
    cfg.host = host;
  }
  if let Some(port) = cli.port {
    cfg.port = port;
  }
  tracing::debug!(mail = ?cfg.mail, "configuration loaded");

  let dispatcher =
    Dispatcher::new(cfg.mail.clone()).context("failed to set up email dispatcher")?;

  let state = if cfg.seed_mock_data {
    AppState::seeded(dispatcher)
  } else {
    AppState::empty(dispatcher)
  };
  tracing::info!(
    camps = state.camps.read().await.len(),
    players = state.players.read().await.len(),
    samples = state.catalog.samples().len(),
    "stores ready"
  );

  let app = Router::new()
    .nest("/api", rinkside_api::api_router(state))
    .layer(TraceLayer::new_for_http());
  let address = format!("{}:{}", cfg.host, cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
