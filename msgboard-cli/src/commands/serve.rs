//! HTTP server command
//!
//! Runs the message API over PostgreSQL, or over process memory with `--in-memory`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use msgboard_server::StoreBackend;

use crate::config::{MsgboardConfig, Settings, SettingsArgs};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Keep messages in memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub in_memory: bool,

    /// Config file to use instead of ~/.msgboard/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

fn store_backend(in_memory: bool, settings: &Settings) -> Result<StoreBackend> {
    if in_memory {
        return Ok(StoreBackend::InMemory);
    }

    let url = settings.database_url.clone().context(
        "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env, or [database] url in the config file (or use --in-memory)",
    )?;

    Ok(StoreBackend::Postgres {
        url,
        max_connections: settings.max_connections,
    })
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let path = args.config.unwrap_or_else(MsgboardConfig::config_path);
    let file = MsgboardConfig::load_from(&path)?;
    let settings = args.settings.resolve(&file)?;
    let backend = store_backend(args.in_memory, &settings)?;

    tracing::info!(
        bind = %settings.bind,
        in_memory = args.in_memory,
        "Starting msgboard server"
    );

    msgboard_server::serve(backend, settings.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
