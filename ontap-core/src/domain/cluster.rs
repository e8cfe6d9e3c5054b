//! Cluster identity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subset of `GET /api/cluster`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterInfo {
    pub name: String,
    #[serde(default)]
    pub uuid: Option<Uuid>,
    #[serde(default)]
    pub version: Option<ClusterVersion>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterVersion {
    pub full: String,
    #[serde(default)]
    pub generation: Option<u32>,
    #[serde(default)]
    pub major: Option<u32>,
    #[serde(default)]
    pub minor: Option<u32>,
}
