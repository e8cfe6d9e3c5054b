//! Qtree records

use serde::{Deserialize, Serialize};

use super::ObjectRef;

/// A qtree as returned by `GET /api/storage/qtrees[/{volume_uuid}/{id}]`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Qtree {
    /// Qtree identifier, unique within its volume (0 is the volume root)
    pub id: u64,
    pub name: String,
    pub volume: ObjectRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svm: Option<ObjectRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unix_permissions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_policy: Option<ExportPolicyRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportPolicyRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
}

/// Qtree reference embedded in quota rules and reports
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QtreeRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}
