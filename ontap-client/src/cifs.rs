//! CIFS share endpoints

use std::collections::BTreeMap;

use crate::OntapClient;
use crate::error::{ClientError, Result};
use crate::query::Filters;
use ontap_core::domain::cifs::{AclEntry, CifsShare, ShareAcl, ShareDetails};

impl OntapClient {
    /// List CIFS shares, optionally only the one named `share_name`
    ///
    /// # Returns
    /// Shares keyed by name
    pub async fn list_cifs_shares(
        &self,
        share_name: Option<&str>,
    ) -> Result<BTreeMap<String, ShareDetails>> {
        let filters = Filters::new().with_opt("name", share_name);
        let url = self.url(&["protocols", "cifs", "shares"], &filters)?;
        let shares: Vec<CifsShare> = self.get_all_records(url).await?;

        Ok(shares
            .iter()
            .map(|share| (share.name.clone(), ShareDetails::from(share)))
            .collect())
    }

    /// Get the ACL of one share
    pub async fn get_share_acl(&self, share: &ShareDetails) -> Result<Vec<AclEntry>> {
        let svm_uuid = share
            .svm_uuid
            .ok_or_else(|| ClientError::ParseError(format!("share {} has no SVM uuid", share.name)))?
            .to_string();
        let url = self.url(
            &["protocols", "cifs", "shares", &svm_uuid, &share.name, "acls"],
            &Filters::new().all_fields(),
        )?;
        let acls: Vec<ShareAcl> = self.get_all_records(url).await?;

        Ok(acls.into_iter().map(AclEntry::from).collect())
    }

    /// List CIFS shares together with their ACLs
    ///
    /// Stops at the first share whose ACL cannot be read.
    pub async fn cifs_share_acls(
        &self,
        share_name: Option<&str>,
    ) -> Result<BTreeMap<String, ShareDetails>> {
        let mut shares = self.list_cifs_shares(share_name).await?;

        for share in shares.values_mut() {
            let acl = self.get_share_acl(share).await?;
            share.acl = Some(acl);
        }

        Ok(shares)
    }
}
