//! Contact Directory - Main entry point
//!
//! Loads configuration and the last snapshot, runs the interactive assistant,
//! and saves the snapshot on exit.

use anyhow::Result;
use contact_directory::storage::SnapshotStore;
use contact_directory::{Config, ConsoleView, FileSnapshotStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only to keep stdout clean for the session)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting assistant with snapshot path: {}",
        config.snapshot_path
    );

    let store = FileSnapshotStore::new(&config.snapshot_path);
    let mut book = store.load()?;
    let mut view = ConsoleView::new();

    contact_directory::repl::run(&mut book, &mut view, &store, config.birthday_window_days)?;

    info!("Assistant shutdown complete");
    Ok(())
}
