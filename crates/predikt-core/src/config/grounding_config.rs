use serde::{Deserialize, Serialize};

use super::defaults;

/// Grounding snapshot cache configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundingConfig {
    /// Maximum number of cached snapshots.
    pub cache_capacity: u64,
    /// Snapshot time-to-live in seconds.
    pub cache_ttl_secs: u64,
}

impl Default for GroundingConfig {
    fn default() -> Self {
        Self {
            cache_capacity: defaults::DEFAULT_GROUNDING_CACHE_CAPACITY,
            cache_ttl_secs: defaults::DEFAULT_GROUNDING_CACHE_TTL_SECS,
        }
    }
}
