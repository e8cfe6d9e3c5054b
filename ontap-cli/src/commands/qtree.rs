//! Qtree command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use ontap_client::{OntapClient, QtreeFilter};
use ontap_core::domain::qtree::Qtree;
use serde_json::json;

use crate::config::Config;

/// Qtree subcommands
#[derive(Subcommand)]
pub enum QtreeCommands {
    /// List qtrees with their details
    List {
        #[arg(long)]
        svm: Option<String>,
        #[arg(long)]
        volume: Option<String>,
        /// Qtree name
        #[arg(long)]
        name: Option<String>,
        /// Only qtrees following the SVM naming prefix
        #[arg(long)]
        managed_only: bool,
    },
    /// Resolve the qtree behind a quota target path
    Resolve {
        #[arg(long)]
        volume: String,
        /// Quota target path, e.g. /vol/<volume>/<qtree>
        #[arg(long)]
        path: String,
    },
}

/// Handle qtree commands
pub async fn handle_qtree_command(command: QtreeCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        QtreeCommands::List {
            svm,
            volume,
            name,
            managed_only,
        } => {
            let filter = QtreeFilter {
                svm,
                volume,
                name,
                managed_prefix: managed_only.then(|| config.svm_prefix.clone()),
            };
            list_qtrees(&client, &filter, config).await
        }
        QtreeCommands::Resolve { volume, path } => {
            let qtree = client
                .find_qtree_by_path(&volume, &path)
                .await
                .with_context(|| format!("Failed to resolve qtree for {}", path))?;

            let value = json!({ "path": path, "volume": volume, "qtree": qtree });
            config.output.emit(&value, || println!("{}", qtree))
        }
    }
}

async fn list_qtrees(client: &OntapClient, filter: &QtreeFilter, config: &Config) -> Result<()> {
    let qtrees = client
        .list_qtrees(filter)
        .await
        .context("Failed to list qtrees")?;

    config.output.emit(&qtrees, || {
        if qtrees.is_empty() {
            println!("{}", "No qtrees found.".yellow());
            return;
        }
        println!("{}", format!("Found {} qtree(s):", qtrees.len()).bold());
        println!();
        for qtree in &qtrees {
            print_qtree(qtree);
        }
    })
}

fn print_qtree(qtree: &Qtree) {
    println!(
        "  {} {} {}",
        "▸".cyan(),
        qtree.name.bold(),
        format!("(id {})", qtree.id).dimmed()
    );
    println!("    Volume:    {}", qtree.volume.name_or_empty());
    if let Some(svm) = &qtree.svm {
        println!("    SVM:       {}", svm.name_or_empty());
    }
    if let Some(path) = &qtree.path {
        println!("    Path:      {}", path);
    }
    if let Some(style) = &qtree.security_style {
        println!("    Security:  {}", style);
    }
    if let Some(policy) = qtree.export_policy.as_ref().and_then(|p| p.name.as_ref()) {
        println!("    Export:    {}", policy);
    }
    println!();
}
