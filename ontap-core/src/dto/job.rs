//! Job DTOs

use serde::{Deserialize, Serialize};

use crate::domain::job::JobRef;

/// Body of a `202 Accepted` answer to a mutating request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobLink {
    pub job: JobRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_link_body() {
        let link: JobLink = serde_json::from_value(serde_json::json!({
            "job": {
                "uuid": "b89bc5dd-94a3-11e8-a7a3-0050568edf84",
                "_links": { "self": { "href": "/api/cluster/jobs/b89bc5dd-94a3-11e8-a7a3-0050568edf84" } }
            }
        }))
        .unwrap();

        assert_eq!(
            link.job.uuid.to_string(),
            "b89bc5dd-94a3-11e8-a7a3-0050568edf84"
        );
    }
}
