//! CIFS/SMB shares and their access control lists

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ObjectRef;

/// A share as listed by `GET /api/protocols/cifs/shares`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CifsShare {
    pub name: String,
    pub svm: ObjectRef,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// One ACL record (`/api/protocols/cifs/shares/{svm_uuid}/{share}/acls`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareAcl {
    pub user_or_group: String,
    #[serde(rename = "type")]
    pub acl_type: String,
    pub permission: String,
}

/// Flattened view of a share, optionally carrying its ACL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareDetails {
    pub name: String,
    pub svm: String,
    pub svm_uuid: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acl: Option<Vec<AclEntry>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclEntry {
    pub user_group: String,
    #[serde(rename = "type")]
    pub acl_type: String,
    pub permission: String,
}

impl From<&CifsShare> for ShareDetails {
    fn from(share: &CifsShare) -> Self {
        ShareDetails {
            name: share.name.clone(),
            svm: share.svm.name_or_empty().to_string(),
            svm_uuid: share.svm.uuid,
            acl: None,
        }
    }
}

impl From<ShareAcl> for AclEntry {
    fn from(acl: ShareAcl) -> Self {
        AclEntry {
            user_group: acl.user_or_group,
            acl_type: acl.acl_type,
            permission: acl.permission,
        }
    }
}
