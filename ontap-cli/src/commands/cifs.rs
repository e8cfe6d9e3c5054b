//! CIFS command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use ontap_core::domain::cifs::ShareDetails;

use crate::config::Config;

/// CIFS subcommands
#[derive(Subcommand)]
pub enum CifsCommands {
    /// List shares
    Shares {
        /// Only the share with this name
        #[arg(long)]
        name: Option<String>,
    },
    /// List shares with their access control lists
    Acls {
        /// Only the share with this name
        #[arg(long)]
        name: Option<String>,
    },
}

/// Handle CIFS commands
pub async fn handle_cifs_command(command: CifsCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    let shares = match command {
        CifsCommands::Shares { name } => client
            .list_cifs_shares(name.as_deref())
            .await
            .context("Failed to list CIFS shares")?,
        CifsCommands::Acls { name } => client
            .cifs_share_acls(name.as_deref())
            .await
            .context("Failed to fetch CIFS share ACLs")?,
    };

    config.output.emit(&shares, || {
        if shares.is_empty() {
            println!("{}", "No CIFS shares found.".yellow());
            return;
        }
        println!("{}", format!("Found {} share(s):", shares.len()).bold());
        println!();
        for share in shares.values() {
            print_share(share);
        }
    })
}

fn print_share(share: &ShareDetails) {
    println!("  {} {} {}", "▸".cyan(), share.name.bold(), share.svm.dimmed());

    if let Some(acl) = &share.acl {
        if acl.is_empty() {
            println!("    {}", "(no ACL entries)".dimmed());
        }
        for entry in acl {
            println!(
                "    {:<40} {:<8} {}",
                entry.user_group,
                entry.acl_type,
                entry.permission.cyan()
            );
        }
    }
    println!();
}
