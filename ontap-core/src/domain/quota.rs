//! Quota rules and quota reports

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ObjectRef;
use super::qtree::QtreeRef;
use crate::units::{bytes_to_gib, bytes_to_mib};

/// A quota policy rule (`/api/storage/quota/rules`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaRule {
    pub uuid: Uuid,
    #[serde(default)]
    pub svm: Option<ObjectRef>,
    #[serde(default)]
    pub volume: Option<ObjectRef>,
    #[serde(default)]
    pub qtree: Option<QtreeRef>,
    #[serde(default, rename = "type")]
    pub rule_type: Option<String>,
    #[serde(default)]
    pub space: Option<SpaceLimits>,
}

/// Hard and soft limits, in bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceLimits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hard_limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soft_limit: Option<u64>,
}

/// A quota report record (`/api/storage/quota/reports[/{volume_uuid}/{index}]`)
///
/// The collection endpoint only returns the identifying fields; usage figures
/// come from the per-record endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaReport {
    pub index: u64,
    pub volume: ObjectRef,
    #[serde(default)]
    pub svm: Option<ObjectRef>,
    #[serde(default)]
    pub qtree: Option<QtreeRef>,
    #[serde(default, rename = "type")]
    pub report_type: Option<String>,
    #[serde(default)]
    pub space: Option<SpaceUsage>,
    #[serde(default)]
    pub files: Option<FilesUsage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpaceUsage {
    #[serde(default)]
    pub hard_limit: Option<u64>,
    #[serde(default)]
    pub soft_limit: Option<u64>,
    #[serde(default)]
    pub used: Option<SpaceUsed>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpaceUsed {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub hard_limit_percent: Option<f64>,
    #[serde(default)]
    pub soft_limit_percent: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilesUsage {
    #[serde(default)]
    pub hard_limit: Option<u64>,
    #[serde(default)]
    pub soft_limit: Option<u64>,
    #[serde(default)]
    pub used: Option<FilesUsed>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilesUsed {
    #[serde(default)]
    pub total: Option<u64>,
}

/// Capacity of a single quota target, in GiB
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuotaSize {
    pub total_space_gb: f64,
    pub used_space_gb: f64,
    pub free_space_gb: f64,
}

/// One line of the tree quota report; sizes are in MiB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotaReportEntry {
    pub svm: String,
    pub volume: String,
    pub qtree: String,
    pub size_total_mb: f64,
    pub size_used_mb: f64,
    pub threshold_mb: f64,
    pub used_pct_disk_limit: f64,
    pub used_pct_threshold: f64,
    pub files_used: u64,
}

impl QuotaReport {
    fn space_used(&self) -> Option<&SpaceUsed> {
        self.space.as_ref().and_then(|space| space.used.as_ref())
    }

    pub fn hard_limit_bytes(&self) -> u64 {
        self.space
            .as_ref()
            .and_then(|space| space.hard_limit)
            .unwrap_or(0)
    }

    pub fn soft_limit_bytes(&self) -> u64 {
        self.space
            .as_ref()
            .and_then(|space| space.soft_limit)
            .unwrap_or(0)
    }

    pub fn used_bytes(&self) -> u64 {
        self.space_used().and_then(|used| used.total).unwrap_or(0)
    }

    pub fn files_used(&self) -> u64 {
        self.files
            .as_ref()
            .and_then(|files| files.used.as_ref())
            .and_then(|used| used.total)
            .unwrap_or(0)
    }

    /// Capacity summary
    ///
    /// A target without a hard limit reports zero total. Free space never goes
    /// below zero, even when usage exceeds the limit.
    pub fn size(&self) -> QuotaSize {
        let total_space_gb = bytes_to_gib(self.hard_limit_bytes());
        let used_space_gb = bytes_to_gib(self.used_bytes());
        QuotaSize {
            total_space_gb,
            used_space_gb,
            free_space_gb: (total_space_gb - used_space_gb).max(0.0),
        }
    }

    /// Flatten into a report line, defaulting every missing figure to zero
    pub fn entry(&self) -> QuotaReportEntry {
        let used = self.space_used();
        QuotaReportEntry {
            svm: self
                .svm
                .as_ref()
                .map(|svm| svm.name_or_empty().to_string())
                .unwrap_or_default(),
            volume: self.volume.name_or_empty().to_string(),
            qtree: self
                .qtree
                .as_ref()
                .and_then(|qtree| qtree.name.clone())
                .unwrap_or_default(),
            size_total_mb: bytes_to_mib(self.hard_limit_bytes()),
            size_used_mb: bytes_to_mib(self.used_bytes()),
            threshold_mb: bytes_to_mib(self.soft_limit_bytes()),
            used_pct_disk_limit: used.and_then(|u| u.hard_limit_percent).unwrap_or(0.0),
            used_pct_threshold: used.and_then(|u| u.soft_limit_percent).unwrap_or(0.0),
            files_used: self.files_used(),
        }
    }
}
