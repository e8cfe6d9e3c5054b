//! Quota rule DTOs

use serde::{Deserialize, Serialize};

use crate::domain::quota::SpaceLimits;

/// PATCH body for `/api/storage/quota/rules/{uuid}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaRulePatch {
    pub space: SpaceLimits,
}

impl QuotaRulePatch {
    /// Set hard and soft space limit to the same byte value
    pub fn space_limit(bytes: u64) -> Self {
        Self {
            space: SpaceLimits {
                hard_limit: Some(bytes),
                soft_limit: Some(bytes),
            },
        }
    }
}
