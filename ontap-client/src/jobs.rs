//! Job endpoints

use async_trait::async_trait;
use uuid::Uuid;

use crate::OntapClient;
use crate::error::{PollError, Result};
use crate::poller::{JobPoller, JobStateSource, PollResult, PollSettings};
use crate::query::Filters;
use ontap_core::domain::job::{Job, JobState};

impl OntapClient {
    /// Get a job by uuid
    pub async fn get_job(&self, job_uuid: Uuid) -> Result<Job> {
        let url = self.url(
            &["cluster", "jobs", &job_uuid.to_string()],
            &Filters::new(),
        )?;
        self.get_json(url).await
    }

    /// Poll a job until it leaves the `running` state or `settings.timeout` elapses
    pub async fn wait_for_job(
        &self,
        job_uuid: Uuid,
        settings: PollSettings,
    ) -> std::result::Result<PollResult, PollError> {
        JobPoller::new(self, settings).await_completion(job_uuid).await
    }
}

#[async_trait]
impl JobStateSource for OntapClient {
    async fn fetch_job_state(&self, job_uuid: Uuid) -> Result<JobState> {
        Ok(self.get_job(job_uuid).await?.state)
    }
}
