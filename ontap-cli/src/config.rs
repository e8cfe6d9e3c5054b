//! Configuration module
//!
//! Handles CLI configuration: cluster endpoint, credentials, transport and
//! output settings.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use ontap_client::{ClientOptions, Credentials, OntapClient};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Cluster management address (host, host:port or full URL)
    pub cluster: String,

    pub credentials: Credentials,

    /// Accept self-signed TLS certificates on the management endpoint
    pub accept_invalid_certs: bool,

    /// Per-request HTTP timeout
    pub request_timeout: Duration,

    /// Naming prefix of provisioned SVMs (e.g. "ifs_prod")
    pub svm_prefix: String,

    pub output: OutputConfig,
}

/// Where and how command results are rendered
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Render results as pretty JSON instead of text
    pub json: bool,
    /// Write the JSON rendering to this file instead of stdout
    pub file: Option<PathBuf>,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.cluster.trim().is_empty() {
            anyhow::bail!("cluster cannot be empty");
        }

        if self.credentials.username().is_empty() {
            anyhow::bail!("api user cannot be empty");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request timeout must be greater than 0");
        }

        if self.svm_prefix.is_empty() {
            anyhow::bail!("svm prefix cannot be empty");
        }

        Ok(())
    }

    /// Build an API client for the configured cluster
    pub fn client(&self) -> Result<OntapClient> {
        let options = ClientOptions {
            accept_invalid_certs: self.accept_invalid_certs,
            timeout: self.request_timeout,
        };

        OntapClient::new(&self.cluster, self.credentials.clone(), options)
            .with_context(|| format!("Failed to create client for {}", self.cluster))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            cluster: "cluster1.example.com".to_string(),
            credentials: Credentials::new("admin", "secret"),
            accept_invalid_certs: false,
            request_timeout: Duration::from_secs(30),
            svm_prefix: "ifs_prod".to_string(),
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = config();

        // Valid config should pass
        assert!(config.validate().is_ok());

        // Empty cluster should fail
        config.cluster = "  ".to_string();
        assert!(config.validate().is_err());
        config.cluster = "cluster1.example.com".to_string();

        // Empty user should fail
        config.credentials = Credentials::new("", "secret");
        assert!(config.validate().is_err());
        config.credentials = Credentials::new("admin", "secret");

        config.request_timeout = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_client_uses_https_by_default() {
        let client = config().client().unwrap();
        assert_eq!(client.base_url(), "https://cluster1.example.com");
    }

    #[test]
    fn test_debug_does_not_leak_password() {
        let debug = format!("{:?}", config());
        assert!(!debug.contains("secret"));
    }
}
