//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use crate::cache::CacheManager;
use crate::external::openweather::OpenWeatherClient;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// Designed for Axum's State extractor; cloning is cheap since the cache
/// manager and HTTP client share their internals via `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct access to the cache manager (used by health checks)
    pub cache: CacheManager,
}

impl AppState {
    /// Creates a new AppState from the shared cache manager and upstream client.
    pub fn new(cache: CacheManager, upstream: OpenWeatherClient) -> Self {
        let services = Services::new(cache.clone(), upstream);
        Self { services, cache }
    }
}
