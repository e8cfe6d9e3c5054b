//! Cluster command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use ontap_core::domain::cluster::ClusterInfo;

use crate::config::Config;

/// Cluster subcommands
#[derive(Subcommand)]
pub enum ClusterCommands {
    /// Show cluster name, uuid and version
    Show,
}

/// Handle cluster commands
pub async fn handle_cluster_command(command: ClusterCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        ClusterCommands::Show => {
            let cluster = client
                .get_cluster()
                .await
                .context("Failed to fetch cluster information")?;
            config.output.emit(&cluster, || print_cluster(&cluster))
        }
    }
}

fn print_cluster(cluster: &ClusterInfo) {
    println!("{} {}", "Cluster".bold(), cluster.name.bold());
    if let Some(uuid) = cluster.uuid {
        println!("  UUID:     {}", uuid.to_string().dimmed());
    }
    if let Some(version) = &cluster.version {
        println!("  Version:  {}", version.full);
    }
    if let Some(location) = &cluster.location {
        println!("  Location: {}", location);
    }
    if let Some(contact) = &cluster.contact {
        println!("  Contact:  {}", contact);
    }
}
