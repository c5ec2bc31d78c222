//! Health check endpoint handlers.
//!
//! The gateway has no hard dependencies: a broken cache degrades lookups
//! instead of failing them, so an unreachable backend reports `degraded`
//! rather than taking the service down.

use std::collections::HashMap;
use std::time::Instant;

use axum::{Json, extract::State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::HEALTH_TAG;
use crate::api::dto::{ComponentHealth, HealthResponse, HealthStatus};
use crate::state::AppState;

/// Register health check routes.
pub fn health_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(health_check))
}

/// GET /health - Service health with a cache backend probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache_check = check_cache(&state).await;
    let overall = cache_check.status;

    let mut checks = HashMap::new();
    checks.insert("cache".to_string(), cache_check);

    Json(HealthResponse {
        status: overall,
        version: crate::pkg_version().to_string(),
        timestamp: jiff::Timestamp::now().to_string(),
        checks,
    })
}

/// Probe the cache backend with a lightweight read.
async fn check_cache(state: &AppState) -> ComponentHealth {
    let start_time = Instant::now();

    match state.cache.probe().await {
        Ok(()) => ComponentHealth {
            status: HealthStatus::Healthy,
            message: Some("Reachable".to_string()),
            response_time_ms: Some(start_time.elapsed().as_millis() as u64),
        },
        Err(e) => ComponentHealth {
            status: HealthStatus::Degraded,
            message: Some(format!("Cache unreachable: {}", e)),
            response_time_ms: Some(start_time.elapsed().as_millis() as u64),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheConfig, CacheManager, MemoryCache};
    use crate::config::settings::UpstreamConfig;
    use crate::external::openweather::OpenWeatherClient;
    use std::sync::Arc;

    fn test_state() -> AppState {
        let config = CacheConfig::default();
        let backend = Arc::new(MemoryCache::new(&config.memory));
        let cache = CacheManager::with_backend(backend, config);
        let upstream = OpenWeatherClient::new(&UpstreamConfig {
            api_key: "test-key".to_string(),
            ..Default::default()
        })
        .unwrap();
        AppState::new(cache, upstream)
    }

    #[tokio::test]
    async fn test_health_check_reports_cache_component() {
        let Json(response) = health_check(State(test_state())).await;

        assert_eq!(response.status, HealthStatus::Healthy);
        assert_eq!(response.version, crate::pkg_version());
        assert!(response.checks.contains_key("cache"));
    }
}
