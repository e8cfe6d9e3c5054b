//! Job poller
//!
//! Drives an asynchronous cluster job to completion from the client side:
//! fetch the job state, and while it is `running`, sleep for the poll interval
//! and fetch again until the timeout elapses.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{PollError, Result};
use ontap_core::domain::job::JobState;

/// Source of job states
///
/// Implemented by [`crate::OntapClient`]; tests substitute a scripted source.
#[async_trait]
pub trait JobStateSource: Send + Sync {
    /// Fetch the current state of a job
    ///
    /// Errors are returned as-is; the poller does not retry them.
    async fn fetch_job_state(&self, job_uuid: Uuid) -> Result<JobState>;
}

/// Poll timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    /// Maximum wall-clock time spent waiting for the job
    pub timeout: Duration,
    /// Delay between two fetches
    pub interval: Duration,
}

impl PollSettings {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);

    pub fn new(timeout: Duration, interval: Duration) -> Self {
        Self { timeout, interval }
    }

    /// Validates the settings
    pub fn validate(&self) -> std::result::Result<(), PollError> {
        if self.timeout.is_zero() {
            return Err(PollError::InvalidSettings(
                "timeout must be greater than 0".to_string(),
            ));
        }

        if self.interval.is_zero() {
            return Err(PollError::InvalidSettings(
                "poll interval must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for PollSettings {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIMEOUT, Self::DEFAULT_INTERVAL)
    }
}

/// How the wait ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    /// The job reported `success`
    Succeeded,
    /// The job reported `failure`
    Failed,
    /// The job left the running state without success or failure
    /// (e.g. `queued`, `paused`, or a state this client does not know)
    Stopped,
    /// The job was still `running` when the timeout elapsed
    TimedOut,
}

impl JobOutcome {
    fn from_state(state: &JobState) -> Self {
        match state {
            JobState::Success => JobOutcome::Succeeded,
            JobState::Failure => JobOutcome::Failed,
            JobState::Running => JobOutcome::TimedOut,
            JobState::Queued | JobState::Other(_) => JobOutcome::Stopped,
        }
    }
}

impl std::fmt::Display for JobOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobOutcome::Succeeded => write!(f, "succeeded"),
            JobOutcome::Failed => write!(f, "failed"),
            JobOutcome::Stopped => write!(f, "stopped"),
            JobOutcome::TimedOut => write!(f, "timed out"),
        }
    }
}

/// Result of waiting on a job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollResult {
    /// Last state observed
    pub state: JobState,
    pub outcome: JobOutcome,
    /// Number of state fetches performed
    pub fetches: u32,
    pub elapsed: Duration,
}

impl PollResult {
    /// Result for a mutation the cluster applied synchronously, without a job
    pub fn completed_inline() -> Self {
        Self {
            state: JobState::Success,
            outcome: JobOutcome::Succeeded,
            fetches: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.state.is_success()
    }
}

/// Wait for `job_uuid` on `source` with `settings`
///
/// Shorthand for [`JobPoller::new`] followed by [`JobPoller::await_completion`].
pub async fn await_job_completion(
    source: &dyn JobStateSource,
    job_uuid: Uuid,
    settings: PollSettings,
) -> std::result::Result<PollResult, PollError> {
    JobPoller::new(source, settings).await_completion(job_uuid).await
}

/// Waits for jobs on a [`JobStateSource`]
pub struct JobPoller<'a> {
    source: &'a dyn JobStateSource,
    settings: PollSettings,
}

impl<'a> JobPoller<'a> {
    /// Creates a new job poller
    pub fn new(source: &'a dyn JobStateSource, settings: PollSettings) -> Self {
        Self { source, settings }
    }

    /// Wait for `job_uuid` to complete
    ///
    /// Fetches the state once; a job already in `success` returns without
    /// sleeping. Otherwise keeps polling every `interval` while the state is
    /// exactly `running` and the timeout has not been reached.
    ///
    /// # Errors
    /// - `PollError::InvalidSettings` before any fetch if the settings are unusable
    /// - `PollError::Fetch` as soon as one fetch fails; no further fetch is made
    pub async fn await_completion(&self, job_uuid: Uuid) -> std::result::Result<PollResult, PollError> {
        self.settings.validate()?;

        let started = Instant::now();
        let deadline = started + self.settings.timeout;
        let mut fetches = 0;

        let mut state = self.fetch(job_uuid, &mut fetches).await?;

        while state.is_running() && Instant::now() < deadline {
            time::sleep(self.settings.interval).await;
            state = self.fetch(job_uuid, &mut fetches).await?;
        }

        let outcome = JobOutcome::from_state(&state);
        let elapsed = started.elapsed();

        match outcome {
            JobOutcome::TimedOut => warn!(
                "Job {} still running after {:?} ({} fetches)",
                job_uuid, elapsed, fetches
            ),
            _ => info!(
                "Job {} {} with state '{}' after {:?}",
                job_uuid, outcome, state, elapsed
            ),
        }

        Ok(PollResult {
            state,
            outcome,
            fetches,
            elapsed,
        })
    }

    async fn fetch(
        &self,
        job_uuid: Uuid,
        fetches: &mut u32,
    ) -> std::result::Result<JobState, PollError> {
        *fetches += 1;
        let state = self
            .source
            .fetch_job_state(job_uuid)
            .await
            .map_err(|source| PollError::Fetch { job_uuid, source })?;

        debug!("Job {} fetch #{}: {}", job_uuid, fetches, state);
        Ok(state)
    }
}
