//! Storage virtual machine (vServer) records

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An SVM as listed by `GET /api/svm/svms`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Svm {
    pub uuid: Uuid,
    pub name: String,
    /// Only present when requested with `fields=state` or `fields=**`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svm_list_record() {
        let svm: Svm = serde_json::from_value(serde_json::json!({
            "uuid": "02c9e252-41be-11e9-81d5-00a0986138f7",
            "name": "ifs_prod_216",
            "_links": { "self": { "href": "/api/svm/svms/02c9e252-41be-11e9-81d5-00a0986138f7" } }
        }))
        .unwrap();

        assert_eq!(svm.name, "ifs_prod_216");
        assert!(svm.state.is_none());
    }
}
