// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! vitalsd: the status dashboard daemon.
//!
//! Loads the command list from a TOML config, then serves coalesced
//! snapshots over HTTP until killed.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vitals_server::{router, Config, SnapshotCoalescer};

#[derive(Debug, Parser)]
#[command(name = "vitalsd", about = "Operational status dashboard daemon")]
struct Args {
    /// Path to the TOML config file
    #[arg(long, default_value = "vitals.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;

    let coalescer = Arc::new(SnapshotCoalescer::new(config.commands.clone(), config.cooldown()));
    let app = router(coalescer);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, commands = config.commands.len(), "vitalsd listening");
    axum::serve(listener, app).await.context("serving http")?;
    Ok(())
}
