//! Query-string filters
//!
//! ONTAP collection endpoints filter on dotted field names
//! (`svm.name=...&volume.name=...`). Filters whose value is absent are left
//! out entirely.

use reqwest::Url;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pairs: Vec<(String, String)>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter that is always present
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.pairs.push((field.to_string(), value.into()));
        self
    }

    /// Add a filter only when a value is given
    pub fn with_opt(self, field: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.with(field, value),
            None => self,
        }
    }

    /// Request every field of the returned records
    pub fn all_fields(self) -> Self {
        self.with("fields", "**")
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Append the filters to `url`, percent-encoding the values
    pub fn apply(&self, url: &mut Url) {
        if self.pairs.is_empty() {
            url.set_query(None);
            return;
        }
        let mut query = url.query_pairs_mut();
        query.clear();
        for (field, value) in &self.pairs {
            query.append_pair(field, value);
        }
    }
}
