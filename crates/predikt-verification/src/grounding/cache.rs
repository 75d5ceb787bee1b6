//! Caller-owned cache of grounding snapshots.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use predikt_core::config::GroundingConfig;
use predikt_core::errors::GroundingError;
use predikt_core::models::GroundingSnapshot;

/// Bounded, TTL-expiring snapshot cache keyed by project id.
///
/// The cache has no global instance: whoever fetches market or on-chain
/// data owns it and hands the resulting snapshot to the verification engine.
#[derive(Clone)]
pub struct GroundingCache {
    inner: Cache<String, Arc<GroundingSnapshot>>,
}

impl GroundingCache {
    pub fn new(config: &GroundingConfig) -> Self {
        let inner = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(Duration::from_secs(config.cache_ttl_secs))
            .build();
        Self { inner }
    }

    pub fn get(&self, key: &str) -> Option<Arc<GroundingSnapshot>> {
        self.inner.get(key)
    }

    pub fn insert(&self, key: impl Into<String>, snapshot: GroundingSnapshot) {
        self.inner.insert(key.into(), Arc::new(snapshot));
    }

    /// Return the cached snapshot or run `fetch` once to populate it.
    ///
    /// Concurrent callers for the same key share one fetch. A failed fetch
    /// is not cached.
    pub fn get_or_fetch<F>(&self, key: &str, fetch: F) -> Result<Arc<GroundingSnapshot>, GroundingError>
    where
        F: FnOnce() -> Result<GroundingSnapshot, GroundingError>,
    {
        self.inner
            .try_get_with(key.to_string(), || fetch().map(Arc::new))
            .map_err(|e| (*e).clone())
    }

    pub fn invalidate(&self, key: &str) {
        self.inner.invalidate(key);
    }

    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    /// Approximate number of live entries.
    pub fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }
}

impl Default for GroundingCache {
    fn default() -> Self {
        Self::new(&GroundingConfig::default())
    }
}

impl std::fmt::Debug for GroundingCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroundingCache")
            .field("entry_count", &self.inner.entry_count())
            .finish()
    }
}
