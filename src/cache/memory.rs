//! Memory cache implementation using cached::SizedCache.

use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use cached::{Cached, SizedCache};

use crate::cache::{CacheError, CacheStore};
use crate::config::settings::MemoryCacheConfig;

struct MemoryEntry {
    value: Vec<u8>,
    expires_at: Instant,
}

/// In-memory cache with a size bound and per-entry TTL.
///
/// The store itself is an LRU (`SizedCache`); expiry is tracked per entry so
/// a caller-supplied TTL wins over the configured default. Expired entries
/// are dropped on the first lookup after their deadline.
pub struct MemoryCache {
    store: Mutex<SizedCache<String, MemoryEntry>>,
    default_ttl: Duration,
}

impl MemoryCache {
    pub fn new(config: &MemoryCacheConfig) -> Self {
        Self {
            store: Mutex::new(SizedCache::with_size(config.max_size)),
            default_ttl: Duration::from_secs(config.ttl_seconds),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, SizedCache<String, MemoryEntry>>, CacheError> {
        self.store
            .lock()
            .map_err(|e| CacheError::Operation(e.to_string()))
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut store = self.lock()?;
        if let Some(entry) = store.cache_get(key) {
            if entry.expires_at > Instant::now() {
                return Ok(Some(entry.value.clone()));
            }
        } else {
            return Ok(None);
        }
        // Past its deadline: evict and report a miss.
        store.cache_remove(key);
        Ok(None)
    }

    async fn set(
        &self,
        key: &str,
        value: Vec<u8>,
        ttl_seconds: Option<u64>,
    ) -> Result<(), CacheError> {
        let ttl = ttl_seconds.map_or(self.default_ttl, Duration::from_secs);
        let entry = MemoryEntry {
            value,
            expires_at: Instant::now() + ttl,
        };
        let mut store = self.lock()?;
        store.cache_set(key.to_string(), entry);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<u64, CacheError> {
        let mut store = self.lock()?;
        Ok(u64::from(store.cache_remove(key).is_some()))
    }

    async fn clear(&self) -> Result<(), CacheError> {
        let mut store = self.lock()?;
        store.cache_clear();
        Ok(())
    }
}
