//! SnapMirror command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;

use crate::config::Config;

/// SnapMirror subcommands
#[derive(Subcommand)]
pub enum SnapmirrorCommands {
    /// Show replication lag of every relationship
    Lag,
}

/// Handle SnapMirror commands
pub async fn handle_snapmirror_command(command: SnapmirrorCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        SnapmirrorCommands::Lag => {
            let lags = client
                .snapmirror_lag_times()
                .await
                .context("Failed to fetch SnapMirror relationships")?;

            config.output.emit(&lags, || {
                if lags.is_empty() {
                    println!("{}", "No SnapMirror relationships found.".yellow());
                    return;
                }
                for lag in &lags {
                    let lag_time = match (&lag.lag_time, lag.lag_seconds) {
                        (Some(raw), Some(secs)) => format!("{} ({}s)", raw, secs),
                        (Some(raw), None) => raw.clone(),
                        (None, _) => "-".to_string(),
                    };
                    println!(
                        "  {} {} {} {}",
                        lag.source_svm.bold(),
                        "→".dimmed(),
                        lag.destination_svm.bold(),
                        lag_time.cyan()
                    );
                }
            })
        }
    }
}
