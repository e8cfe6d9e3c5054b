//! Job domain types
//!
//! Asynchronous operations tracked by the cluster. A mutating request that
//! cannot finish inline answers with a job reference; the job record is then
//! polled under `/api/cluster/jobs/{uuid}`.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Job record as returned by `GET /api/cluster/jobs/{uuid}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub uuid: Uuid,
    pub state: JobState,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub start_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub end_time: Option<DateTime<FixedOffset>>,
}

/// Server-reported job state
///
/// ONTAP documents `queued`, `running`, `paused`, `success` and `failure`;
/// anything that is not one of the four states the client acts on is kept
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobState {
    Queued,
    Running,
    Success,
    Failure,
    Other(String),
}

impl JobState {
    /// The raw state string as the server spells it
    pub fn as_str(&self) -> &str {
        match self {
            JobState::Queued => "queued",
            JobState::Running => "running",
            JobState::Success => "success",
            JobState::Failure => "failure",
            JobState::Other(raw) => raw,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, JobState::Success)
    }

    /// Whether the job is still executing on the cluster
    ///
    /// Only `running` counts; a `queued` job is reported as-is and not waited on.
    pub fn is_running(&self) -> bool {
        matches!(self, JobState::Running)
    }
}

impl From<String> for JobState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "queued" => JobState::Queued,
            "running" => JobState::Running,
            "success" => JobState::Success,
            "failure" => JobState::Failure,
            _ => JobState::Other(raw),
        }
    }
}

impl From<&str> for JobState {
    fn from(raw: &str) -> Self {
        JobState::from(raw.to_string())
    }
}

impl From<JobState> for String {
    fn from(state: JobState) -> Self {
        match state {
            JobState::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a job embedded in the body of an accepted mutating request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRef {
    pub uuid: Uuid,
}
