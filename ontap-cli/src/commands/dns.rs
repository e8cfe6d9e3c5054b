//! DNS command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use serde_json::json;

use crate::config::Config;

/// DNS subcommands
#[derive(Subcommand)]
pub enum DnsCommands {
    /// Print the uuid of an SVM's DNS configuration
    Uuid {
        #[arg(long)]
        svm: String,
    },
}

/// Handle DNS commands
pub async fn handle_dns_command(command: DnsCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        DnsCommands::Uuid { svm } => {
            let uuid = client
                .dns_uuid(&svm)
                .await
                .with_context(|| format!("Failed to look up DNS configuration of {}", svm))?;

            config
                .output
                .emit(&json!({ "svm": svm, "uuid": uuid }), || println!("{}", uuid))
        }
    }
}
