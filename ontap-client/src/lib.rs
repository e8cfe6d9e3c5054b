//! ONTAP HTTP Client
//!
//! A small, type-safe client for the NetApp ONTAP management REST API.
//!
//! Every method maps to one or two HTTP requests against `https://{cluster}/api`
//! and returns typed records from `ontap-core`. Mutating requests that the
//! cluster runs asynchronously return a job reference, which [`JobPoller`]
//! drives to completion.
//!
//! # Example
//!
//! ```no_run
//! use ontap_client::{ClientOptions, Credentials, OntapClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = OntapClient::new(
//!         "cluster1.example.com",
//!         Credentials::new("admin", "secret"),
//!         ClientOptions::default(),
//!     )?;
//!
//!     for svm in client.list_svms().await? {
//!         println!("{} {}", svm.uuid, svm.name);
//!     }
//!     Ok(())
//! }
//! ```

mod cifs;
mod cluster;
mod dns;
pub mod error;
mod jobs;
pub mod poller;
mod qtrees;
pub mod query;
mod quotas;
mod snapmirror;
#[cfg(test)]
mod test_server;

// Re-export commonly used types
pub use error::{ClientError, PollError, Result};
pub use poller::{
    JobOutcome, JobPoller, JobStateSource, PollResult, PollSettings, await_job_completion,
};
pub use qtrees::{QtreeFilter, managed_qtree_pattern, strip_vol_prefix};
pub use query::Filters;
pub use quotas::{QuotaFilter, QuotaTarget};

use std::time::Duration;

use ontap_core::dto::records::Records;
use reqwest::{Client, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Username/password pair sent as HTTP Basic authentication
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Transport settings for the underlying HTTP client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Accept self-signed or otherwise invalid TLS certificates
    pub accept_invalid_certs: bool,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            accept_invalid_certs: false,
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the ONTAP management API
///
/// Methods are grouped by resource:
/// - Cluster inventory (cluster identity, SVMs, volumes)
/// - Storage (qtrees, quota rules and reports)
/// - Protocols and name services (CIFS shares, DNS)
/// - Data protection (SnapMirror)
/// - Jobs
#[derive(Debug, Clone)]
pub struct OntapClient {
    /// Cluster management endpoint (e.g., "https://cluster1.example.com")
    base_url: Url,
    credentials: Credentials,
    /// HTTP client instance
    client: Client,
}

impl OntapClient {
    /// Create a new client for the cluster management endpoint
    ///
    /// # Arguments
    /// * `cluster` - Host name or `host:port`; `https://` is assumed when no scheme is given
    /// * `credentials` - API user and password
    /// * `options` - TLS and timeout settings
    pub fn new(
        cluster: &str,
        credentials: Credentials,
        options: ClientOptions,
    ) -> Result<Self> {
        if options.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for {}", cluster);
        }

        let client = Client::builder()
            .timeout(options.timeout)
            .danger_accept_invalid_certs(options.accept_invalid_certs)
            .build()
            .map_err(|e| ClientError::InvalidConfig(format!("Failed to build HTTP client: {}", e)))?;

        Self::with_client(cluster, credentials, client)
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure proxies, root certificates, etc.
    pub fn with_client(cluster: &str, credentials: Credentials, client: Client) -> Result<Self> {
        Ok(Self {
            base_url: cluster_url(cluster)?,
            credentials,
            client,
        })
    }

    /// Get the cluster management URL, without trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    // =============================================================================
    // Request Helpers
    // =============================================================================

    /// Build `{base}/api/{segments...}?{filters}`
    ///
    /// Segments are percent-encoded individually, so share names and other
    /// user-supplied identifiers can be passed as-is.
    pub(crate) fn url(&self, segments: &[&str], filters: &Filters) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidConfig("cluster URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        filters.apply(&mut url);
        Ok(url)
    }

    /// GET a single JSON document
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// GET a collection, following `_links.next` until the last page
    pub(crate) async fn get_all_records<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>> {
        let mut records = Vec::new();
        let mut next = Some(url);

        while let Some(url) = next.take() {
            let page: Records<T> = self.get_json(url).await?;
            if let Some(href) = page.next_href() {
                let next_url = self.base_url.join(href).map_err(|e| {
                    ClientError::ParseError(format!("Invalid next link '{}': {}", href, e))
                })?;
                next = Some(next_url);
            }
            records.extend(page.records);
        }

        Ok(records)
    }

    /// GET a collection and return its first record
    ///
    /// # Errors
    /// `ClientError::NotFound` with the message built by `what` when the collection is empty
    pub(crate) async fn get_first_record<T: DeserializeOwned>(
        &self,
        url: Url,
        what: impl FnOnce() -> String,
    ) -> Result<T> {
        let page: Records<T> = self.get_json(url).await?;
        page.into_first().ok_or_else(|| ClientError::NotFound(what()))
    }

    /// PATCH a JSON body and return the response body (empty bodies yield `None`)
    pub(crate) async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<Option<T>> {
        debug!("PATCH {}", url);
        let response = self
            .client
            .patch(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::api_error(status.as_u16(), text));
        }

        if text.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

/// Turn the `--cluster` argument into the management endpoint URL
fn cluster_url(cluster: &str) -> Result<Url> {
    let cluster = cluster.trim().trim_end_matches('/');
    if cluster.is_empty() {
        return Err(ClientError::InvalidConfig(
            "cluster address cannot be empty".to_string(),
        ));
    }

    let raw = if cluster.contains("://") {
        cluster.to_string()
    } else {
        format!("https://{}", cluster)
    };

    let url = Url::parse(&raw)
        .map_err(|e| ClientError::InvalidConfig(format!("Invalid cluster address '{}': {}", cluster, e)))?;

    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(ClientError::InvalidConfig(format!(
            "Invalid cluster address '{}'",
            cluster
        )));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{CannedServer, Reply};

    fn client(cluster: &str) -> OntapClient {
        OntapClient::with_client(cluster, Credentials::new("admin", "pw"), Client::new()).unwrap()
    }

    #[test]
    fn test_client_defaults_to_https() {
        let client = client("cluster1.example.com");
        assert_eq!(client.base_url(), "https://cluster1.example.com");
    }

    #[test]
    fn test_client_keeps_explicit_scheme_and_port() {
        let client = client("http://127.0.0.1:8443/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8443");
    }

    #[test]
    fn test_client_rejects_empty_cluster() {
        let result =
            OntapClient::with_client("  ", Credentials::new("admin", "pw"), Client::new());
        assert!(matches!(result, Err(ClientError::InvalidConfig(_))));
    }

    #[test]
    fn test_url_encodes_segments_and_filters() {
        let client = client("cluster1.example.com");
        let url = client
            .url(
                &["protocols", "cifs", "shares", "svm-uuid", "team data$", "acls"],
                &Filters::new().all_fields(),
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://cluster1.example.com/api/protocols/cifs/shares/svm-uuid/team%20data$/acls?fields=**"
        );
    }

    #[test]
    fn test_url_without_filters() {
        let client = client("cluster1.example.com");
        let url = client.url(&["svm", "svms"], &Filters::new()).unwrap();
        assert_eq!(url.as_str(), "https://cluster1.example.com/api/svm/svms");
    }

    #[test]
    fn test_next_link_resolves_against_cluster_root() {
        let client = client("cluster1.example.com");
        let next = client
            .base_url
            .join("/api/svm/svms?start.uuid=abc&max_records=20")
            .unwrap();
        assert_eq!(
            next.as_str(),
            "https://cluster1.example.com/api/svm/svms?start.uuid=abc&max_records=20"
        );
    }

    #[tokio::test]
    async fn test_get_all_records_follows_next_link() {
        let server = CannedServer::start(vec![
            Reply::ok(serde_json::json!({
                "records": [{ "name": "svm_a" }, { "name": "svm_b" }],
                "num_records": 2,
                "_links": { "next": { "href": "/api/svm/svms?start.name=svm_b&max_records=2" } }
            })),
            Reply::ok(serde_json::json!({
                "records": [{ "name": "svm_c" }],
                "num_records": 1
            })),
        ])
        .await;
        let client = server.client();

        let url = client.url(&["svm", "svms"], &Filters::new()).unwrap();
        let names: Vec<String> = client
            .get_all_records::<serde_json::Value>(url)
            .await
            .unwrap()
            .into_iter()
            .map(|record| record["name"].as_str().unwrap().to_string())
            .collect();

        assert_eq!(names, vec!["svm_a", "svm_b", "svm_c"]);
        let requests = server.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].target, "/api/svm/svms");
        assert_eq!(
            requests[1].target,
            "/api/svm/svms?start.name=svm_b&max_records=2"
        );
    }

    #[tokio::test]
    async fn test_get_first_record_of_empty_collection_is_not_found() {
        let server = CannedServer::start(vec![Reply::ok(serde_json::json!({
            "records": [],
            "num_records": 0
        }))])
        .await;
        let client = server.client();

        let url = client.url(&["storage", "qtrees"], &Filters::new()).unwrap();
        let err = client
            .get_first_record::<serde_json::Value>(url, || "no qtree".to_string())
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_error_status_is_api_error() {
        let server = CannedServer::start(vec![Reply::json(
            503,
            serde_json::json!({ "error": { "message": "busy" } }),
        )])
        .await;
        let client = server.client();

        let err = client.get_cluster().await.unwrap_err();
        assert!(err.is_server_error());
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let debug = format!("{:?}", Credentials::new("admin", "hunter2"));
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }
}
