//! Name-service endpoints

use uuid::Uuid;

use crate::OntapClient;
use crate::error::{ClientError, Result};
use crate::query::Filters;
use ontap_core::domain::dns::DnsConfig;

impl OntapClient {
    /// Get the DNS configuration of an SVM
    ///
    /// # Errors
    /// `ClientError::NotFound` when the SVM has no DNS configuration
    pub async fn get_dns(&self, svm_name: &str) -> Result<DnsConfig> {
        let filters = Filters::new().with("svm.name", svm_name);
        let url = self.url(&["name-services", "dns"], &filters)?;
        self.get_first_record(url, || format!("no DNS configuration for SVM {}", svm_name))
            .await
    }

    /// Get the uuid identifying an SVM's DNS configuration
    pub async fn dns_uuid(&self, svm_name: &str) -> Result<Uuid> {
        self.get_dns(svm_name).await?.record_uuid().ok_or_else(|| {
            ClientError::ParseError(format!(
                "DNS configuration for SVM {} carries no uuid",
                svm_name
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_server::{CannedServer, Reply};

    #[tokio::test]
    async fn test_dns_uuid_prefers_record_uuid() {
        let server = CannedServer::start(vec![Reply::ok(serde_json::json!({
            "records": [{
                "uuid": "179d3c85-7053-11e8-b9b8-005056b41bd1",
                "svm": { "name": "svm1", "uuid": "02c9e252-41be-11e9-81d5-00a0986138f7" }
            }],
            "num_records": 1
        }))])
        .await;

        let uuid = server.client().dns_uuid("svm1").await.unwrap();

        assert_eq!(uuid.to_string(), "179d3c85-7053-11e8-b9b8-005056b41bd1");
        assert_eq!(
            server.requests()[0].target,
            "/api/name-services/dns?svm.name=svm1"
        );
    }
}
