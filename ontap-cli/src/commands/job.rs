//! Job command handlers
//!
//! Inspects asynchronous cluster jobs and waits for them to finish.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use ontap_core::domain::job::{Job, JobState};
use uuid::Uuid;

use super::{PollArgs, report_poll_result};
use crate::config::Config;

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// Get job details
    Get {
        /// Job UUID
        uuid: Uuid,
    },
    /// Wait until a job leaves the running state
    Wait {
        /// Job UUID
        uuid: Uuid,
        #[command(flatten)]
        poll: PollArgs,
    },
}

/// Handle job commands
pub async fn handle_job_command(command: JobCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        JobCommands::Get { uuid } => {
            let job = client
                .get_job(uuid)
                .await
                .with_context(|| format!("Failed to fetch job {}", uuid))?;
            config.output.emit(&job, || print_job_details(&job))
        }
        JobCommands::Wait { uuid, poll } => {
            let result = client
                .wait_for_job(uuid, poll.settings())
                .await
                .with_context(|| format!("Failed to wait for job {}", uuid))?;

            report_poll_result(&format!("Job {}", uuid), &result, config)
        }
    }
}

/// Print detailed job information
fn print_job_details(job: &Job) {
    println!("{}", format!("Job {}", job.uuid).bold());
    println!("{}", "─".repeat(60).dimmed());
    println!("  State:       {}", colorize_state(&job.state));

    if let Some(description) = &job.description {
        println!("  Description: {}", description);
    }
    if let Some(message) = &job.message {
        println!("  Message:     {}", message);
    }
    if let Some(code) = job.code {
        println!("  Code:        {}", code);
    }
    if let Some(start) = job.start_time {
        println!(
            "  Started:     {}",
            start.format("%Y-%m-%d %H:%M:%S %:z").to_string().dimmed()
        );
    }
    if let Some(end) = job.end_time {
        println!(
            "  Ended:       {}",
            end.format("%Y-%m-%d %H:%M:%S %:z").to_string().dimmed()
        );
    }
}

/// Colorize job state for display
fn colorize_state(state: &JobState) -> colored::ColoredString {
    let text = state.as_str().to_string();
    match state {
        JobState::Queued => text.yellow(),
        JobState::Running => text.blue(),
        JobState::Success => text.green(),
        JobState::Failure => text.red(),
        JobState::Other(_) => text.normal(),
    }
}
