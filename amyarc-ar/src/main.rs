//! amyarc-ar (Archive Retrieval) - Read-only analysis archive service
//!
//! Serves previously produced conversation-analysis records and their
//! audio clips from a flat archive folder over HTTP. No write path.

use std::path::PathBuf;

use amyarc_ar::{build_router, AppState};
use amyarc_common::config::{resolve_archive_folder, TomlConfig};
use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "amyarc-ar")]
#[command(about = "Archive Retrieval service for saved conversation analyses")]
#[command(version)]
struct Args {
    /// HTTP server port (overrides config file)
    #[arg(short, long, env = "AMYARC_AR_PORT")]
    port: Option<u16>,

    /// Archive folder holding analysis records and audio clips
    #[arg(short, long)]
    archive_folder: Option<PathBuf>,

    /// Path to TOML configuration file (overrides default locations)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Bootstrap configuration; an explicit --config path must load, the
    // default locations degrade to built-in defaults.
    let config = match &args.config {
        Some(path) => TomlConfig::load(path)?,
        None => TomlConfig::load_default_location(),
    };

    // Initialize tracing subscriber; RUST_LOG overrides the config level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Amyarc Archive Retrieval (amyarc-ar) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    // Archive folder resolution: CLI > env > TOML > OS default
    let archive_folder = resolve_archive_folder(args.archive_folder.as_deref(), &config);
    if !archive_folder.is_dir() {
        // Read-only service: never create the archive folder
        bail!(
            "Archive folder {} does not exist or is not a directory",
            archive_folder.display()
        );
    }
    info!("Archive folder: {}", archive_folder.display());

    let state = AppState::new(archive_folder);
    let app = build_router(state);

    let port = args.port.unwrap_or(config.port);
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("amyarc-ar listening on http://{}", addr);
    info!("Health check: http://127.0.0.1:{}/health", port);

    axum::serve(listener, app).await?;

    Ok(())
}
