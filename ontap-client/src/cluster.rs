//! Cluster inventory endpoints

use crate::OntapClient;
use crate::error::Result;
use crate::query::Filters;
use ontap_core::domain::cluster::ClusterInfo;
use ontap_core::domain::svm::Svm;
use ontap_core::domain::volume::Volume;

impl OntapClient {
    // =============================================================================
    // Cluster
    // =============================================================================

    /// Get the cluster name, uuid and ONTAP version
    pub async fn get_cluster(&self) -> Result<ClusterInfo> {
        let url = self.url(&["cluster"], &Filters::new())?;
        self.get_json(url).await
    }

    // =============================================================================
    // SVMs and Volumes
    // =============================================================================

    /// List every SVM on the cluster
    ///
    /// # Example
    /// ```no_run
    /// # use ontap_client::{ClientOptions, Credentials, OntapClient};
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = OntapClient::new(
    ///     "cluster1.example.com",
    ///     Credentials::new("admin", "secret"),
    ///     ClientOptions::default(),
    /// )?;
    /// let svms = client.list_svms().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_svms(&self) -> Result<Vec<Svm>> {
        let url = self.url(&["svm", "svms"], &Filters::new())?;
        self.get_all_records(url).await
    }

    /// List volumes, optionally restricted to one SVM
    pub async fn list_volumes(&self, svm_name: Option<&str>) -> Result<Vec<Volume>> {
        let filters = Filters::new()
            .with_opt("svm.name", svm_name)
            .with("fields", "svm,state,size");
        let url = self.url(&["storage", "volumes"], &filters)?;
        self.get_all_records(url).await
    }
}
