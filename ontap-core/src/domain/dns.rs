//! Name-service DNS configuration

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ObjectRef;

/// DNS configuration of one SVM (`GET /api/name-services/dns`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsConfig {
    /// Present on older releases; newer ones identify the record by its SVM
    #[serde(default)]
    pub uuid: Option<Uuid>,
    #[serde(default)]
    pub svm: Option<ObjectRef>,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub servers: Vec<String>,
}

impl DnsConfig {
    /// Identifier of the DNS record, falling back to the owning SVM's uuid
    pub fn record_uuid(&self) -> Option<Uuid> {
        self.uuid
            .or_else(|| self.svm.as_ref().and_then(|svm| svm.uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_uuid_prefers_own_uuid() {
        let dns: DnsConfig = serde_json::from_value(serde_json::json!({
            "uuid": "179d3c85-7053-11e8-b9b8-005056b41bd1",
            "svm": { "name": "ifs_prod_1058", "uuid": "02c9e252-41be-11e9-81d5-00a0986138f7" }
        }))
        .unwrap();

        assert_eq!(
            dns.record_uuid().unwrap().to_string(),
            "179d3c85-7053-11e8-b9b8-005056b41bd1"
        );
    }

    #[test]
    fn test_record_uuid_falls_back_to_svm() {
        let dns: DnsConfig = serde_json::from_value(serde_json::json!({
            "svm": { "name": "ifs_prod_1058", "uuid": "02c9e252-41be-11e9-81d5-00a0986138f7" },
            "domains": ["corp.example.com"],
            "servers": ["10.0.0.53"]
        }))
        .unwrap();

        assert_eq!(
            dns.record_uuid().unwrap().to_string(),
            "02c9e252-41be-11e9-81d5-00a0986138f7"
        );
        assert_eq!(dns.domains, vec!["corp.example.com".to_string()]);
    }

    #[test]
    fn test_record_uuid_missing() {
        let dns: DnsConfig = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(dns.record_uuid().is_none());
    }
}
