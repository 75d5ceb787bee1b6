use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Well-known grounding field names.
pub mod fields {
    pub const MARKET_SIZE_USD: &str = "market_size_usd";
    pub const MARKET_CAP_USD: &str = "market_cap_usd";
    pub const TVL_USD: &str = "tvl_usd";
    pub const GROWTH_RATE_PCT: &str = "growth_rate_pct";
    pub const TOKEN_ALLOCATION_PCT: &str = "token_allocation_pct";
    pub const ACTIVE_USERS: &str = "active_users";
}

/// Independently verified figures used as ground truth for claims.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GroundingSnapshot {
    #[serde(default)]
    pub project_id: Option<String>,
    /// Where the figures came from (market-data API, on-chain indexer, ...).
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub captured_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub values: BTreeMap<String, f64>,
}

impl GroundingSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, field: impl Into<String>, value: f64) -> Self {
        self.values.insert(field.into(), value);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Finite value for `field`, if present.
    pub fn get(&self, field: &str) -> Option<f64> {
        self.values.get(field).copied().filter(|v| v.is_finite())
    }

    pub fn market_size_usd(&self) -> Option<f64> {
        self.get(fields::MARKET_SIZE_USD)
    }

    pub fn growth_rate_pct(&self) -> Option<f64> {
        self.get(fields::GROWTH_RATE_PCT)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
