//! Aurelia Nexus - Orbital conversation terminal
//!
//! A conversational portal where every message drifts on an orbital ring
//! around a pulsing spectrum core while a companion synthesizes its replies.

mod app;
mod events;
mod keyboard;
mod theme;
mod views;

use std::fs::File;
use std::sync::Mutex;

use anyhow::Result;
use nexus_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "aurelia-nexus.log";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // The terminal belongs to the interface, so logs go to a file
    let log_path = std::env::temp_dir().join(LOG_FILE);
    let log_file = File::create(&log_path)?;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(log_file)),
        )
        .init();

    tracing::info!("Starting Aurelia Nexus");

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    app::run(config).await
}
