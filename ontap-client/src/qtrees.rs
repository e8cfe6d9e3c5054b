//! Qtree endpoints

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::OntapClient;
use crate::error::{ClientError, Result};
use crate::query::Filters;
use ontap_core::domain::qtree::Qtree;

/// Optional filters for [`OntapClient::list_qtrees`]
#[derive(Debug, Clone, Default)]
pub struct QtreeFilter {
    pub svm: Option<String>,
    pub volume: Option<String>,
    pub name: Option<String>,
    /// Keep only qtrees named `{prefix}[_]<n>_vol_<m>`
    pub managed_prefix: Option<String>,
}

static VOL_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)/vol").expect("constant pattern compiles"));

/// Remove every `/vol` component marker (any case) from a quota target path
///
/// `/vol/ifs_tim_svm_47_vol/ifs_tim_svm_47_vol_51` becomes
/// `/ifs_tim_svm_47_vol/ifs_tim_svm_47_vol_51`.
pub fn strip_vol_prefix(path: &str) -> String {
    VOL_MARKER.replace_all(path, "").into_owned()
}

/// Pattern matching qtree names provisioned under an SVM naming prefix
pub fn managed_qtree_pattern(prefix: &str) -> Result<Regex> {
    Regex::new(&format!(r"^{}_?\d+_vol_\d+$", regex::escape(prefix)))
        .map_err(|e| ClientError::InvalidRequest(format!("Invalid SVM prefix '{}': {}", prefix, e)))
}

impl OntapClient {
    /// Resolve the name of the qtree backing a quota target path
    ///
    /// # Arguments
    /// * `volume_name` - Volume holding the qtree
    /// * `quota_target` - Target path, e.g. `/vol/{volume}/{qtree}`
    ///
    /// # Errors
    /// `ClientError::NotFound` when no qtree has that path
    pub async fn find_qtree_by_path(&self, volume_name: &str, quota_target: &str) -> Result<String> {
        let path = strip_vol_prefix(quota_target);
        let filters = Filters::new()
            .with("volume.name", volume_name)
            .with("path", path.as_str());
        let url = self.url(&["storage", "qtrees"], &filters)?;

        let qtree: Qtree = self
            .get_first_record(url, || {
                format!("no qtree path found for the quota target {}", quota_target)
            })
            .await?;
        Ok(qtree.name)
    }

    /// Get full details of one qtree
    pub async fn get_qtree(&self, volume_uuid: &str, qtree_id: u64) -> Result<Qtree> {
        let url = self.url(
            &["storage", "qtrees", volume_uuid, &qtree_id.to_string()],
            &Filters::new(),
        )?;
        self.get_json(url).await
    }

    /// List qtrees matching `filter`, with full details for each
    ///
    /// The collection is listed first; each match is then fetched from its own
    /// endpoint. A failed detail fetch fails the whole listing.
    pub async fn list_qtrees(&self, filter: &QtreeFilter) -> Result<Vec<Qtree>> {
        let managed = filter
            .managed_prefix
            .as_deref()
            .map(managed_qtree_pattern)
            .transpose()?;

        let filters = Filters::new()
            .with_opt("svm.name", filter.svm.as_deref())
            .with_opt("volume.name", filter.volume.as_deref())
            .with_opt("name", filter.name.as_deref());
        let url = self.url(&["storage", "qtrees"], &filters)?;
        let listed: Vec<Qtree> = self.get_all_records(url).await?;

        let mut qtrees = Vec::with_capacity(listed.len());
        for qtree in listed {
            if let Some(pattern) = &managed {
                if !pattern.is_match(&qtree.name) {
                    debug!("Skipping unmanaged qtree {}", qtree.name);
                    continue;
                }
            }

            let volume_uuid = qtree.volume.uuid.ok_or_else(|| {
                ClientError::ParseError(format!("qtree {} has no volume uuid", qtree.name))
            })?;
            qtrees.push(self.get_qtree(&volume_uuid.to_string(), qtree.id).await?);
        }

        Ok(qtrees)
    }
}
