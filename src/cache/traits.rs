//! CacheStore trait definition.

use async_trait::async_trait;

use crate::cache::CacheError;

/// Capability set every cache backend provides.
///
/// Payloads are opaque bytes; encoding and fault policy live in the
/// [`CacheManager`](crate::cache::CacheManager), not in the backends.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Get the value stored under `key`, if present and not expired.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Store `value` under `key`. `ttl_seconds` overrides the backend's
    /// default TTL when given.
    async fn set(
        &self,
        key: &str,
        value: Vec<u8>,
        ttl_seconds: Option<u64>,
    ) -> Result<(), CacheError>;

    /// Remove `key`, returning how many entries were removed.
    async fn remove(&self, key: &str) -> Result<u64, CacheError>;

    /// Drop every entry in the store.
    async fn clear(&self) -> Result<(), CacheError>;
}
