//! Quota command handlers
//!
//! Reports quota usage and resizes tree quotas. Resizing is applied by the
//! cluster as an asynchronous job, which is waited on before returning.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use ontap_client::{OntapClient, QuotaFilter, QuotaTarget};
use ontap_core::domain::quota::QuotaReportEntry;
use serde_json::json;

use super::{PollArgs, report_poll_result};
use crate::config::Config;

/// Quota subcommands
#[derive(Subcommand)]
pub enum QuotaCommands {
    /// Find the uuid of the quota rule for a qtree
    RuleUuid {
        #[arg(long)]
        svm: String,
        #[arg(long)]
        volume: String,
        #[arg(long)]
        qtree: String,
    },
    /// Show capacity (GiB) of the first matching quota target
    Size {
        #[arg(long)]
        svm: Option<String>,
        #[arg(long)]
        volume: Option<String>,
        #[arg(long)]
        qtree: Option<String>,
    },
    /// Tree quota usage report
    Report {
        #[arg(long)]
        svm: Option<String>,
        #[arg(long)]
        volume: Option<String>,
        #[arg(long)]
        qtree: Option<String>,
    },
    /// Set the hard and soft space limit of a tree quota and wait for the job
    Modify {
        #[arg(long)]
        svm: String,
        #[arg(long)]
        volume: String,
        /// Quota target path, e.g. /vol/<volume>/<qtree>
        #[arg(long)]
        path: String,
        /// New limit in TiB
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        limit_tib: u64,
        #[command(flatten)]
        poll: PollArgs,
    },
}

/// Handle quota commands
pub async fn handle_quota_command(command: QuotaCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        QuotaCommands::RuleUuid { svm, volume, qtree } => {
            let uuid = client
                .find_quota_rule_uuid(&svm, &volume, &qtree)
                .await
                .with_context(|| format!("Failed to find quota rule for {}", qtree))?;

            let value = json!({ "svm": svm, "volume": volume, "qtree": qtree, "uuid": uuid });
            config.output.emit(&value, || println!("{}", uuid))
        }
        QuotaCommands::Size { svm, volume, qtree } => {
            let filter = QuotaFilter { svm, volume, qtree };
            let size = client
                .quota_size(&filter)
                .await
                .context("Failed to fetch quota size")?;

            config.output.emit(&size, || {
                println!("  Total:  {:.2} GiB", size.total_space_gb);
                println!("  Used:   {:.2} GiB", size.used_space_gb);
                println!("  Free:   {}", format!("{:.2} GiB", size.free_space_gb).green());
            })
        }
        QuotaCommands::Report { svm, volume, qtree } => {
            let filter = QuotaFilter { svm, volume, qtree };
            quota_report(&client, &filter, config).await
        }
        QuotaCommands::Modify {
            svm,
            volume,
            path,
            limit_tib,
            poll,
        } => {
            let target = QuotaTarget { svm, volume, path };
            let result = client
                .modify_quota_size(&target, limit_tib, poll.settings())
                .await
                .with_context(|| format!("Failed to modify quota for {}", target.path))?;

            report_poll_result("Quota update", &result, config)
        }
    }
}

async fn quota_report(client: &OntapClient, filter: &QuotaFilter, config: &Config) -> Result<()> {
    let entries = client
        .quota_report(filter)
        .await
        .context("Failed to fetch quota report")?;

    config.output.emit(&entries, || {
        if entries.is_empty() {
            println!("{}", "No tree quotas found.".yellow());
            return;
        }
        println!("{}", format!("Found {} tree quota(s):", entries.len()).bold());
        println!();
        for entry in &entries {
            print_report_entry(entry);
        }
    })
}

fn print_report_entry(entry: &QuotaReportEntry) {
    println!(
        "  {} {} {}",
        "▸".cyan(),
        entry.qtree.bold(),
        format!("{}/{}", entry.svm, entry.volume).dimmed()
    );
    println!(
        "    Used:       {:.1} MiB of {:.1} MiB ({})",
        entry.size_used_mb,
        entry.size_total_mb,
        colorize_percent(entry.used_pct_disk_limit)
    );
    println!(
        "    Threshold:  {:.1} MiB ({:.0}% used)",
        entry.threshold_mb, entry.used_pct_threshold
    );
    println!("    Files:      {}", entry.files_used);
    println!();
}

/// Colorize usage relative to the hard limit
fn colorize_percent(percent: f64) -> colored::ColoredString {
    let text = format!("{:.0}%", percent);
    if percent >= 95.0 {
        text.red()
    } else if percent >= 80.0 {
        text.yellow()
    } else {
        text.green()
    }
}
