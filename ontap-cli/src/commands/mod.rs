//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod cifs;
mod cluster;
mod dns;
mod job;
mod qtree;
mod quota;
mod snapmirror;
mod svm;
mod volume;

pub use cifs::CifsCommands;
pub use cluster::ClusterCommands;
pub use dns::DnsCommands;
pub use job::JobCommands;
pub use qtree::QtreeCommands;
pub use quota::QuotaCommands;
pub use snapmirror::SnapmirrorCommands;
pub use svm::SvmCommands;
pub use volume::VolumeCommands;

use std::time::Duration;

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use ontap_client::{JobOutcome, PollResult, PollSettings};
use serde_json::json;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Cluster identity
    Cluster {
        #[command(subcommand)]
        command: ClusterCommands,
    },
    /// Storage virtual machines
    Svm {
        #[command(subcommand)]
        command: SvmCommands,
    },
    /// Volumes
    Volume {
        #[command(subcommand)]
        command: VolumeCommands,
    },
    /// Qtrees
    Qtree {
        #[command(subcommand)]
        command: QtreeCommands,
    },
    /// Quota rules and reports
    Quota {
        #[command(subcommand)]
        command: QuotaCommands,
    },
    /// CIFS shares and ACLs
    Cifs {
        #[command(subcommand)]
        command: CifsCommands,
    },
    /// DNS configuration
    Dns {
        #[command(subcommand)]
        command: DnsCommands,
    },
    /// SnapMirror relationships
    Snapmirror {
        #[command(subcommand)]
        command: SnapmirrorCommands,
    },
    /// Asynchronous cluster jobs
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
///
/// # Returns
/// Result indicating success or failure
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Cluster { command } => cluster::handle_cluster_command(command, config).await,
        Commands::Svm { command } => svm::handle_svm_command(command, config).await,
        Commands::Volume { command } => volume::handle_volume_command(command, config).await,
        Commands::Qtree { command } => qtree::handle_qtree_command(command, config).await,
        Commands::Quota { command } => quota::handle_quota_command(command, config).await,
        Commands::Cifs { command } => cifs::handle_cifs_command(command, config).await,
        Commands::Dns { command } => dns::handle_dns_command(command, config).await,
        Commands::Snapmirror { command } => {
            snapmirror::handle_snapmirror_command(command, config).await
        }
        Commands::Job { command } => job::handle_job_command(command, config).await,
    }
}

/// Poll timing flags shared by commands that wait on a job
#[derive(Args, Debug, Clone, Copy)]
pub struct PollArgs {
    /// Give up waiting after this many seconds
    #[arg(long, default_value_t = 300)]
    pub timeout: u64,

    /// Seconds between two job state checks
    #[arg(long, default_value_t = 10)]
    pub interval: u64,
}

impl PollArgs {
    pub fn settings(&self) -> PollSettings {
        PollSettings::new(
            Duration::from_secs(self.timeout),
            Duration::from_secs(self.interval),
        )
    }
}

/// Report the outcome of a job wait; fails unless the job succeeded
fn report_poll_result(label: &str, result: &PollResult, config: &Config) -> Result<()> {
    let value = json!({
        "state": result.state.as_str(),
        "outcome": result.outcome.to_string(),
        "succeeded": result.succeeded(),
        "fetches": result.fetches,
        "elapsed_seconds": result.elapsed.as_secs_f64(),
    });

    config.output.emit(&value, || {
        let outcome = match result.outcome {
            JobOutcome::Succeeded => result.outcome.to_string().green(),
            JobOutcome::TimedOut => result.outcome.to_string().yellow(),
            JobOutcome::Failed | JobOutcome::Stopped => result.outcome.to_string().red(),
        };
        println!("{} {}", label.bold(), outcome);
        println!("  State:    {}", result.state);
        println!(
            "  Waited:   {}",
            format!("{:.0}s over {} check(s)", result.elapsed.as_secs_f64(), result.fetches)
                .dimmed()
        );
    })?;

    if !result.succeeded() {
        anyhow::bail!("{} {} (last state: {})", label, result.outcome, result.state);
    }

    Ok(())
}
