//! SnapMirror replication relationships

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ObjectRef;
use crate::units::parse_iso8601_duration;

/// Relationship record from `GET /api/snapmirror/relationships?fields=**`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapmirrorRelationship {
    pub uuid: Uuid,
    pub source: Endpoint,
    pub destination: Endpoint,
    /// ISO-8601 duration since the last successful transfer (e.g. `PT1H2M3S`)
    #[serde(default)]
    pub lag_time: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub healthy: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub svm: Option<ObjectRef>,
}

impl Endpoint {
    pub fn svm_name(&self) -> &str {
        self.svm
            .as_ref()
            .map(ObjectRef::name_or_empty)
            .unwrap_or_default()
    }
}

/// Replication lag between a source and destination SVM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapmirrorLag {
    pub source_svm: String,
    pub destination_svm: String,
    pub lag_time: Option<String>,
    pub lag_seconds: Option<u64>,
}

impl From<&SnapmirrorRelationship> for SnapmirrorLag {
    fn from(rel: &SnapmirrorRelationship) -> Self {
        SnapmirrorLag {
            source_svm: rel.source.svm_name().to_string(),
            destination_svm: rel.destination.svm_name().to_string(),
            lag_time: rel.lag_time.clone(),
            lag_seconds: rel.lag_time.as_deref().and_then(parse_iso8601_duration),
        }
    }
}
