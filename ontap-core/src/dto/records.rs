//! Collection envelope
//!
//! Every collection endpoint answers with
//! `{"records": [...], "num_records": n, "_links": {"next": {"href": ..}}}`.
//! The `next` link is only present when the server truncated the page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Records<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    #[serde(default)]
    pub num_records: Option<u64>,
    #[serde(default, rename = "_links")]
    pub links: Option<Links>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub next: Option<Href>,
    #[serde(default, rename = "self")]
    pub self_link: Option<Href>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Href {
    pub href: String,
}

impl<T> Records<T> {
    /// Path of the next page, relative to the cluster root
    pub fn next_href(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|links| links.next.as_ref())
            .map(|next| next.href.as_str())
    }

    pub fn into_first(self) -> Option<T> {
        self.records.into_iter().next()
    }
}
