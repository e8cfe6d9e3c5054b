//! SnapMirror endpoints

use tracing::debug;

use crate::OntapClient;
use crate::error::Result;
use crate::query::Filters;
use ontap_core::domain::snapmirror::{SnapmirrorLag, SnapmirrorRelationship};

impl OntapClient {
    /// List every SnapMirror relationship with all fields
    pub async fn list_snapmirror_relationships(&self) -> Result<Vec<SnapmirrorRelationship>> {
        let url = self.url(
            &["snapmirror", "relationships"],
            &Filters::new().all_fields(),
        )?;
        self.get_all_records(url).await
    }

    /// Replication lag of every relationship, keyed by source and destination SVM
    pub async fn snapmirror_lag_times(&self) -> Result<Vec<SnapmirrorLag>> {
        let relationships = self.list_snapmirror_relationships().await?;
        debug!("Found {} SnapMirror relationship(s)", relationships.len());

        Ok(relationships.iter().map(SnapmirrorLag::from).collect())
    }
}
