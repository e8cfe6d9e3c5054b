//! Volume command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use ontap_core::units::bytes_to_gib;

use crate::config::Config;

/// Volume subcommands
#[derive(Subcommand)]
pub enum VolumeCommands {
    /// List volumes
    List {
        /// Only volumes of this SVM
        #[arg(long)]
        svm: Option<String>,
    },
}

/// Handle volume commands
pub async fn handle_volume_command(command: VolumeCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        VolumeCommands::List { svm } => {
            let volumes = client
                .list_volumes(svm.as_deref())
                .await
                .context("Failed to list volumes")?;

            config.output.emit(&volumes, || {
                if volumes.is_empty() {
                    println!("{}", "No volumes found.".yellow());
                    return;
                }
                println!("{}", format!("Found {} volume(s):", volumes.len()).bold());
                println!();
                for volume in &volumes {
                    let svm = volume
                        .svm
                        .as_ref()
                        .map(|svm| svm.name_or_empty())
                        .unwrap_or_default();
                    println!("  {} {} {}", "▸".cyan(), volume.name.bold(), svm.dimmed());
                    if let Some(state) = &volume.state {
                        println!("    State:  {}", state);
                    }
                    if let Some(size) = volume.size {
                        println!("    Size:   {:.2} GiB", bytes_to_gib(size));
                    }
                }
            })
        }
    }
}
