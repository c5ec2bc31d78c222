//! Cache manager that dispatches to the configured backend.
//!
//! The manager is constructed once during bootstrap and injected wherever
//! cache access is needed; there is no process-global instance. It owns two
//! policies the backends stay ignorant of:
//!
//! - **JSON codec**: payloads are JSON-encoded on write and decoded on read,
//!   so anything stored round-trips exactly.
//! - **Fault degradation**: a failing backend turns `get` into a miss, `set`
//!   into a reported failure and `remove` into a zero count. Faults are
//!   logged here and never surface to the request path.

use std::sync::Arc;

use serde_json::Value;

use crate::cache::memory::MemoryCache;
use crate::cache::noop::NoOpCache;
use crate::cache::redis::RedisCache;
use crate::cache::{CacheError, CacheStore};
use crate::config::settings::{CacheBackend, CacheConfig};

/// Cache manager that provides access to the configured cache backend.
#[derive(Clone)]
pub struct CacheManager {
    backend: Arc<dyn CacheStore>,
    config: CacheConfig,
}

impl CacheManager {
    /// Create a new cache manager with the given configuration.
    ///
    /// If caching is disabled, a NoOpCache is used.
    pub async fn new(config: CacheConfig) -> Result<Self, CacheError> {
        let backend: Arc<dyn CacheStore> = if !config.enabled {
            Arc::new(NoOpCache::new())
        } else {
            match config.backend {
                CacheBackend::Memory => Arc::new(MemoryCache::new(&config.memory)),
                CacheBackend::Redis => Arc::new(RedisCache::new(&config.redis).await?),
            }
        };

        Ok(Self { backend, config })
    }

    /// Create a manager over an explicit backend.
    ///
    /// Used by tests to substitute a fake store without configuration.
    pub fn with_backend(backend: Arc<dyn CacheStore>, config: CacheConfig) -> Self {
        Self { backend, config }
    }

    /// Check if caching is enabled.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// TTL in seconds applied to cached origin responses.
    pub fn response_ttl(&self) -> u64 {
        self.config.response_ttl
    }

    /// Fetch and JSON-decode the value stored under `key`.
    ///
    /// Backend faults and undecodable payloads both report absence.
    pub async fn get_value(&self, key: &str) -> Option<Value> {
        match self.backend.get(key).await {
            Ok(Some(raw)) => match serde_json::from_slice(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(key, error = %e, "Cached payload is not valid JSON, treating as miss");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "Cache get failed");
                None
            }
        }
    }

    /// JSON-encode `value` and store it under `key`.
    ///
    /// Returns whether the write succeeded; faults degrade to `false`.
    pub async fn put_value(&self, key: &str, value: &Value, ttl_seconds: Option<u64>) -> bool {
        let raw = match serde_json::to_vec(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to encode payload for caching");
                return false;
            }
        };
        match self.backend.set(key, raw, ttl_seconds).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key, error = %e, "Cache set failed");
                false
            }
        }
    }

    /// Remove `key`, returning the number of removed entries.
    ///
    /// Faults degrade to `0`.
    pub async fn remove(&self, key: &str) -> u64 {
        match self.backend.remove(key).await {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(key, error = %e, "Cache delete failed");
                0
            }
        }
    }

    /// Issue a lightweight backend read to check reachability.
    pub async fn probe(&self) -> Result<(), CacheError> {
        self.backend.get("stratus:probe").await.map(|_| ())
    }
}
