//! Volume records

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ObjectRef;

/// A FlexVol or FlexGroup volume
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volume {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svm: Option<ObjectRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}
