//! Core domain types
//!
//! Records returned by the ONTAP REST API. Every field the server may omit
//! (depending on the `fields=` selector or the object type) is modelled as an
//! `Option`, so a partial response still deserializes.

pub mod cifs;
pub mod cluster;
pub mod dns;
pub mod job;
pub mod qtree;
pub mod quota;
pub mod snapmirror;
pub mod svm;
pub mod volume;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Embedded reference to another ONTAP object (`{"name": .., "uuid": ..}`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,
}

impl ObjectRef {
    /// Name of the referenced object, or an empty string when the server omitted it
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}
