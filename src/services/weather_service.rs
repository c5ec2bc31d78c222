//! Read-through weather lookup service.

use serde_json::Value;

use crate::cache::CacheManager;
use crate::error::AppResult;
use crate::external::openweather::{Endpoint, OpenWeatherClient, WeatherQuery};

/// Outcome of a weather lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// Opaque provider payload.
    pub data: Value,
    /// Whether the payload was served from the cache.
    pub from_cache: bool,
}

/// Derive the canonical cache key for `endpoint` and `query`.
///
/// Deterministic: the identifying value comes from the same precedence rule
/// that builds the outbound query string, so two queries resolving to the
/// same location under the same endpoint always share a key.
pub fn cache_key(endpoint: Endpoint, query: &WeatherQuery) -> String {
    let token = query
        .location()
        .map(|location| location.cache_token())
        .unwrap_or_default();
    format!("{}-{}", endpoint.path_segment(), token)
}

/// Service implementing the read-through protocol.
///
/// Per request: validate, derive the key, consult the cache, and on a miss
/// fetch from the origin and repopulate the cache. The cache is best-effort
/// on both sides; only validation and origin failures fail a request.
#[derive(Clone)]
pub struct WeatherService {
    cache: CacheManager,
    upstream: OpenWeatherClient,
}

impl WeatherService {
    pub fn new(cache: CacheManager, upstream: OpenWeatherClient) -> Self {
        Self { cache, upstream }
    }

    pub async fn get_weather(
        &self,
        endpoint: Endpoint,
        query: &WeatherQuery,
    ) -> AppResult<WeatherReport> {
        query.validate()?;
        let key = cache_key(endpoint, query);

        if let Some(data) = self.cache.get_value(&key).await {
            tracing::debug!(key = %key, "Cache hit");
            return Ok(WeatherReport {
                data,
                from_cache: true,
            });
        }

        tracing::info!(key = %key, endpoint = %endpoint, "Cache miss, fetching from origin");
        let data = self.upstream.fetch(endpoint, query).await?;

        // Best-effort write; the manager already logged any fault.
        self.cache
            .put_value(&key, &data, Some(self.cache.response_ttl()))
            .await;

        Ok(WeatherReport {
            data,
            from_cache: false,
        })
    }
}
