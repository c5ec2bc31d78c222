//! Weather lookup handlers.
//!
//! Thin wrappers over the read-through weather service; all decisions
//! (validation, cache, origin) happen in the service layer.

use axum::{
    Json,
    extract::{Query, State},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::WEATHER_TAG;
use crate::api::dto::{ErrorResponse, WeatherResponse};
use crate::error::AppResult;
use crate::external::openweather::{Endpoint, WeatherQuery};
use crate::state::AppState;

/// Register weather routes.
pub fn weather_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(current_weather))
        .routes(routes!(forecast_weather))
}

/// GET /api/v1/weather/current - Current weather for a location.
#[utoipa::path(
    get,
    path = "/current",
    tag = WEATHER_TAG,
    params(WeatherQuery),
    responses(
        (status = 200, description = "Weather data", body = WeatherResponse),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Upstream fetch failed", body = ErrorResponse)
    )
)]
async fn current_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<WeatherResponse>> {
    let report = state
        .services
        .weather
        .get_weather(Endpoint::Current, &query)
        .await?;
    Ok(Json(report.into()))
}

/// GET /api/v1/weather/forecast - Forecast for a location.
#[utoipa::path(
    get,
    path = "/forecast",
    tag = WEATHER_TAG,
    params(WeatherQuery),
    responses(
        (status = 200, description = "Forecast data", body = WeatherResponse),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Upstream fetch failed", body = ErrorResponse)
    )
)]
async fn forecast_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<WeatherResponse>> {
    let report = state
        .services
        .weather
        .get_weather(Endpoint::Forecast, &query)
        .await?;
    Ok(Json(report.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheConfig, CacheManager, MemoryCache};
    use crate::config::settings::UpstreamConfig;
    use crate::external::openweather::OpenWeatherClient;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_state(base_url: &str) -> AppState {
        let config = CacheConfig::default();
        let backend = Arc::new(MemoryCache::new(&config.memory));
        let cache = CacheManager::with_backend(backend, config);
        let upstream = OpenWeatherClient::new(&UpstreamConfig {
            base_url: base_url.to_string(),
            api_key: "test-key".to_string(),
            ..Default::default()
        })
        .unwrap();
        AppState::new(cache, upstream)
    }

    #[tokio::test]
    async fn test_current_weather_success_envelope() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("q", "London"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "London"})))
            .mount(&mock_server)
            .await;

        let state = test_state(&mock_server.uri());
        let query = WeatherQuery {
            q: Some("London".to_string()),
            ..Default::default()
        };

        let Json(response) = current_weather(State(state), Query(query)).await.unwrap();
        assert!(response.success);
        assert_eq!(response.message, "Weather data fetched successfully");
        assert_eq!(response.data["name"], "London");
    }

    #[tokio::test]
    async fn test_repeated_lookup_reports_cache_origin() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "London"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let state = test_state(&mock_server.uri());
        let query = WeatherQuery {
            q: Some("London".to_string()),
            ..Default::default()
        };

        let Json(first) = current_weather(State(state.clone()), Query(query.clone()))
            .await
            .unwrap();
        let Json(second) = current_weather(State(state), Query(query)).await.unwrap();

        assert_eq!(first.message, "Weather data fetched successfully");
        assert_eq!(
            second.message,
            "Weather data fetched successfully from cache"
        );
        assert_eq!(first.data, second.data);
    }

    #[tokio::test]
    async fn test_invalid_query_is_validation_error() {
        let mock_server = MockServer::start().await;
        let state = test_state(&mock_server.uri());
        let query = WeatherQuery {
            lat: Some(10.0),
            ..Default::default()
        };

        let err = current_weather(State(state), Query(query))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Both latitude and longitude must be provided together"
        );
    }
}
