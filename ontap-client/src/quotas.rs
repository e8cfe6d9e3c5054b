//! Quota rule and quota report endpoints

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::OntapClient;
use crate::error::{ClientError, PollError, Result};
use crate::poller::{PollResult, PollSettings};
use crate::query::Filters;
use ontap_core::domain::job::JobRef;
use ontap_core::domain::quota::{QuotaReport, QuotaReportEntry, QuotaRule, QuotaSize};
use ontap_core::dto::job::JobLink;
use ontap_core::dto::quota::QuotaRulePatch;
use ontap_core::units::tib_to_bytes;

/// Optional SVM/volume/qtree filters shared by the quota report queries
#[derive(Debug, Clone, Default)]
pub struct QuotaFilter {
    pub svm: Option<String>,
    pub volume: Option<String>,
    pub qtree: Option<String>,
}

impl QuotaFilter {
    fn apply(&self, filters: Filters) -> Filters {
        filters
            .with_opt("svm.name", self.svm.as_deref())
            .with_opt("volume.name", self.volume.as_deref())
            .with_opt("qtree.name", self.qtree.as_deref())
    }
}

/// The tree quota whose limits are changed by [`OntapClient::modify_quota_size`]
#[derive(Debug, Clone)]
pub struct QuotaTarget {
    pub svm: String,
    pub volume: String,
    /// Quota target path, e.g. `/vol/{volume}/{qtree}`
    pub path: String,
}

impl OntapClient {
    // =============================================================================
    // Quota Rules
    // =============================================================================

    /// Find the uuid of the tree quota rule for a qtree
    ///
    /// # Errors
    /// `ClientError::NotFound` when no rule exists for the qtree
    pub async fn find_quota_rule_uuid(
        &self,
        svm_name: &str,
        volume_name: &str,
        qtree_name: &str,
    ) -> Result<Uuid> {
        let filters = Filters::new()
            .with("svm.name", svm_name)
            .with("volume.name", volume_name)
            .with("qtree.name", qtree_name);
        let url = self.url(&["storage", "quota", "rules"], &filters)?;

        let rule: QuotaRule = self
            .get_first_record(url, || {
                format!("no quota rule found for the qtree {}", qtree_name)
            })
            .await?;
        Ok(rule.uuid)
    }

    /// Set hard and soft space limit of a quota rule
    ///
    /// # Returns
    /// The job applying the change, or `None` if the cluster applied it inline
    pub async fn update_quota_rule_space(
        &self,
        rule_uuid: Uuid,
        limit_bytes: u64,
    ) -> Result<Option<JobRef>> {
        let url = self.url(
            &["storage", "quota", "rules", &rule_uuid.to_string()],
            &Filters::new(),
        )?;
        let body = QuotaRulePatch::space_limit(limit_bytes);

        let link: Option<JobLink> = self.patch_json(url, &body).await?;
        Ok(link.map(|link| link.job))
    }

    /// Resize the tree quota behind `target` to `limit_tib` TiB and wait for the job
    ///
    /// Resolves the qtree from the target path, then its quota rule, patches
    /// the rule and polls the resulting job with `settings`.
    pub async fn modify_quota_size(
        &self,
        target: &QuotaTarget,
        limit_tib: u64,
        settings: PollSettings,
    ) -> std::result::Result<PollResult, PollError> {
        settings.validate()?;

        let limit_bytes = tib_to_bytes(limit_tib).ok_or_else(|| {
            ClientError::InvalidRequest(format!("quota limit of {} TiB is too large", limit_tib))
        })?;

        let qtree_name = self.find_qtree_by_path(&target.volume, &target.path).await?;
        let rule_uuid = self
            .find_quota_rule_uuid(&target.svm, &target.volume, &qtree_name)
            .await?;

        info!(
            "Setting quota rule {} ({}/{}/{}) to {} bytes",
            rule_uuid, target.svm, target.volume, qtree_name, limit_bytes
        );

        match self.update_quota_rule_space(rule_uuid, limit_bytes).await? {
            Some(job) => self.wait_for_job(job.uuid, settings).await,
            None => {
                debug!("Quota rule {} updated without a job", rule_uuid);
                Ok(PollResult::completed_inline())
            }
        }
    }

    // =============================================================================
    // Quota Reports
    // =============================================================================

    /// Get one quota report record with usage figures
    pub async fn get_quota_report(&self, volume_uuid: Uuid, index: u64) -> Result<QuotaReport> {
        let url = self.url(
            &[
                "storage",
                "quota",
                "reports",
                &volume_uuid.to_string(),
                &index.to_string(),
            ],
            &Filters::new(),
        )?;
        self.get_json(url).await
    }

    /// Capacity of the first quota target matching `filter`, in GiB
    ///
    /// # Errors
    /// `ClientError::NotFound` when no quota report matches
    pub async fn quota_size(&self, filter: &QuotaFilter) -> Result<QuotaSize> {
        let url = self.url(&["storage", "quota", "reports"], &filter.apply(Filters::new()))?;
        let listed: QuotaReport = self
            .get_first_record(url, || "no quota report matches the filter".to_string())
            .await?;

        let detail = self
            .get_quota_report(report_volume_uuid(&listed)?, listed.index)
            .await?;
        Ok(detail.size())
    }

    /// Tree quota usage for every target matching `filter`
    ///
    /// Targets whose detail record cannot be fetched are skipped with a warning.
    pub async fn quota_report(&self, filter: &QuotaFilter) -> Result<Vec<QuotaReportEntry>> {
        let filters = filter.apply(Filters::new().with("type", "tree"));
        let url = self.url(&["storage", "quota", "reports"], &filters)?;
        let listed: Vec<QuotaReport> = self.get_all_records(url).await?;
        debug!("Quota report lists {} tree target(s)", listed.len());

        let mut entries = Vec::with_capacity(listed.len());
        for report in listed {
            let volume_uuid = match report_volume_uuid(&report) {
                Ok(uuid) => uuid,
                Err(e) => {
                    warn!("Skipping quota report {}: {}", report.index, e);
                    continue;
                }
            };

            match self.get_quota_report(volume_uuid, report.index).await {
                Ok(detail) => entries.push(detail.entry()),
                Err(e) => warn!(
                    "Skipping quota report {}/{}: {}",
                    volume_uuid, report.index, e
                ),
            }
        }

        Ok(entries)
    }
}

fn report_volume_uuid(report: &QuotaReport) -> Result<Uuid> {
    report.volume.uuid.ok_or_else(|| {
        ClientError::ParseError(format!("quota report {} has no volume uuid", report.index))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{CannedServer, Reply};
    use serde_json::json;

    const RULE_UUID: &str = "5f1d13a7-f401-11e8-ac1a-005056a7695a";
    const JOB_UUID: &str = "b89bc5dd-94a3-11e8-a7a3-0050568edf84";
    const VOLUME_UUID: &str = "028baa66-41bd-11e9-81d5-00a0986138f7";

    fn target() -> QuotaTarget {
        QuotaTarget {
            svm: "svm1".to_string(),
            volume: "v".to_string(),
            path: "/vol/v/q51".to_string(),
        }
    }

    fn qtree_page() -> Reply {
        Reply::ok(json!({
            "records": [{ "id": 51, "name": "q51", "volume": { "name": "v" } }],
            "num_records": 1
        }))
    }

    fn rule_page() -> Reply {
        Reply::ok(json!({ "records": [{ "uuid": RULE_UUID }], "num_records": 1 }))
    }

    fn report_detail(index: u64, qtree: &str) -> Reply {
        Reply::ok(json!({
            "index": index,
            "volume": { "name": "v", "uuid": VOLUME_UUID },
            "svm": { "name": "svm1" },
            "qtree": { "name": qtree },
            "space": { "hard_limit": 1073741824u64, "used": { "total": 536870912u64 } }
        }))
    }

    #[tokio::test]
    async fn test_modify_quota_size_patches_rule_and_waits_for_job() {
        let server = CannedServer::start(vec![
            qtree_page(),
            rule_page(),
            Reply::json(202, json!({ "job": { "uuid": JOB_UUID } })),
            Reply::ok(json!({ "uuid": JOB_UUID, "state": "success" })),
        ])
        .await;

        let result = server
            .client()
            .modify_quota_size(&target(), 2, PollSettings::default())
            .await
            .unwrap();

        assert_eq!(result.outcome, crate::JobOutcome::Succeeded);
        assert_eq!(result.fetches, 1);

        let requests = server.requests();
        assert_eq!(requests.len(), 4);
        assert_eq!(
            requests[0].target,
            "/api/storage/qtrees?volume.name=v&path=%2Fv%2Fq51"
        );
        assert_eq!(
            requests[1].target,
            "/api/storage/quota/rules?svm.name=svm1&volume.name=v&qtree.name=q51"
        );
        assert_eq!(requests[2].method, "PATCH");
        assert_eq!(
            requests[2].target,
            format!("/api/storage/quota/rules/{}", RULE_UUID)
        );
        let body: serde_json::Value = serde_json::from_str(&requests[2].body).unwrap();
        assert_eq!(
            body,
            json!({ "space": { "hard_limit": 2199023255552u64, "soft_limit": 2199023255552u64 } })
        );
        assert_eq!(requests[3].target, format!("/api/cluster/jobs/{}", JOB_UUID));
    }

    #[tokio::test]
    async fn test_modify_quota_size_without_job_completes_inline() {
        let server = CannedServer::start(vec![qtree_page(), rule_page(), Reply::empty(200)]).await;

        let result = server
            .client()
            .modify_quota_size(&target(), 1, PollSettings::default())
            .await
            .unwrap();

        assert!(result.succeeded());
        assert_eq!(result.fetches, 0);
        assert_eq!(server.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_modify_quota_size_missing_rule_fails_before_patch() {
        let server = CannedServer::start(vec![
            qtree_page(),
            Reply::ok(json!({ "records": [], "num_records": 0 })),
        ])
        .await;

        let err = server
            .client()
            .modify_quota_size(&target(), 1, PollSettings::default())
            .await
            .unwrap_err();

        assert!(matches!(err, PollError::Submit(ClientError::NotFound(_))));
        assert!(server.requests().iter().all(|r| r.method == "GET"));
    }

    #[tokio::test]
    async fn test_modify_quota_size_rejected_patch_is_submit_error() {
        let server = CannedServer::start(vec![
            qtree_page(),
            rule_page(),
            Reply::json(400, json!({ "error": { "message": "invalid limit" } })),
        ])
        .await;

        let err = server
            .client()
            .modify_quota_size(&target(), 1, PollSettings::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PollError::Submit(ClientError::ApiError { status: 400, .. })
        ));
    }

    #[tokio::test]
    async fn test_quota_report_skips_failed_detail() {
        let server = CannedServer::start(vec![
            Reply::ok(json!({
                "records": [
                    { "index": 1, "volume": { "name": "v", "uuid": VOLUME_UUID } },
                    { "index": 2, "volume": { "name": "v", "uuid": VOLUME_UUID } }
                ],
                "num_records": 2
            })),
            Reply::json(500, json!({ "error": { "message": "detail unavailable" } })),
            report_detail(2, "q2"),
        ])
        .await;

        let entries = server
            .client()
            .quota_report(&QuotaFilter {
                svm: Some("svm1".to_string()),
                ..QuotaFilter::default()
            })
            .await
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].qtree, "q2");
        assert_eq!(entries[0].size_total_mb, 1024.0);

        let requests = server.requests();
        assert_eq!(
            requests[0].target,
            "/api/storage/quota/reports?type=tree&svm.name=svm1"
        );
        assert_eq!(
            requests[1].target,
            format!("/api/storage/quota/reports/{}/1", VOLUME_UUID)
        );
    }

    #[tokio::test]
    async fn test_quota_size_reads_detail_record() {
        let server = CannedServer::start(vec![
            Reply::ok(json!({
                "records": [{ "index": 7, "volume": { "name": "v", "uuid": VOLUME_UUID } }],
                "num_records": 1
            })),
            report_detail(7, "q7"),
        ])
        .await;

        let size = server
            .client()
            .quota_size(&QuotaFilter::default())
            .await
            .unwrap();

        assert_eq!(size.total_space_gb, 1.0);
        assert_eq!(size.used_space_gb, 0.5);
        assert_eq!(size.free_space_gb, 0.5);
    }

    #[test]
    fn test_quota_filter_skips_missing_fields() {
        let filter = QuotaFilter {
            svm: Some("ifs_prod_216".to_string()),
            volume: None,
            qtree: Some("ifs_prod_216_vol_246".to_string()),
        };

        let expected = Filters::new()
            .with("type", "tree")
            .with("svm.name", "ifs_prod_216")
            .with("qtree.name", "ifs_prod_216_vol_246");
        assert_eq!(filter.apply(Filters::new().with("type", "tree")), expected);
    }

    #[test]
    fn test_empty_quota_filter() {
        assert!(QuotaFilter::default().apply(Filters::new()).is_empty());
    }

    #[test]
    fn test_report_without_volume_uuid_is_rejected() {
        let report: QuotaReport = serde_json::from_value(serde_json::json!({
            "volume": { "name": "vol1" },
            "index": 7
        }))
        .unwrap();

        assert!(matches!(
            report_volume_uuid(&report),
            Err(ClientError::ParseError(_))
        ));
    }
}
