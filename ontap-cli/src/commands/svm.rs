//! SVM command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;

use crate::config::Config;

/// SVM subcommands
#[derive(Subcommand)]
pub enum SvmCommands {
    /// List all SVMs
    List,
}

/// Handle SVM commands
pub async fn handle_svm_command(command: SvmCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        SvmCommands::List => {
            let svms = client.list_svms().await.context("Failed to list SVMs")?;

            config.output.emit(&svms, || {
                if svms.is_empty() {
                    println!("{}", "No SVMs found.".yellow());
                    return;
                }
                println!("{}", format!("Found {} SVM(s):", svms.len()).bold());
                println!();
                for svm in &svms {
                    println!("  {} {}", "▸".cyan(), svm.name.bold());
                    println!("    UUID:   {}", svm.uuid.to_string().dimmed());
                    if let Some(state) = &svm.state {
                        println!("    State:  {}", state);
                    }
                }
            })
        }
    }
}
