use std::time::Duration;

use serde_json::Value;

use super::types::{Endpoint, WeatherQuery};
use crate::config::settings::UpstreamConfig;
use crate::error::{AppError, AppResult};

/// HTTP client for the OpenWeather data API.
///
/// Built once at startup and injected wherever origin fetches happen; the
/// inner `reqwest::Client` reuses its connection pool across requests.
/// Cloning is cheap.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .use_rustls_tls()
            .build()
            .map_err(|e| AppError::Internal { source: e.into() })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn make_error(message: impl Into<String>, source: Option<anyhow::Error>) -> AppError {
        AppError::Upstream {
            message: message.into(),
            source,
        }
    }

    /// Fetch the JSON payload for `endpoint` and `query` from the provider.
    ///
    /// The identifying parameter is selected by the same precedence rule the
    /// cache key uses, and the API key is attached as `appid`. Fails on
    /// network errors, non-2xx statuses, and bodies that are not valid JSON.
    /// No retries at this layer.
    pub async fn fetch(&self, endpoint: Endpoint, query: &WeatherQuery) -> AppResult<Value> {
        let url = format!("{}/{}", self.base_url, endpoint.path_segment());
        let mut params = query
            .location()
            .map(|location| location.query_pairs())
            .unwrap_or_default();
        params.push(("appid", self.api_key.clone()));

        let resp = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e: reqwest::Error| {
                Self::make_error(format!("{endpoint} request failed: {e}"), Some(e.into()))
            })?
            .error_for_status()
            .map_err(|e: reqwest::Error| {
                Self::make_error(format!("{endpoint} HTTP error: {e}"), Some(e.into()))
            })?;

        resp.json().await.map_err(|e: reqwest::Error| {
            Self::make_error(format!("{endpoint} invalid JSON: {e}"), Some(e.into()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> OpenWeatherClient {
        OpenWeatherClient::new(&UpstreamConfig {
            base_url: base_url.to_string(),
            api_key: "test-key".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    fn city_query(q: &str) -> WeatherQuery {
        WeatherQuery {
            q: Some(q.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_current_by_city() {
        let mock_server = MockServer::start().await;
        let payload = json!({"name": "London", "main": {"temp": 280.32}});

        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("q", "London"))
            .and(query_param("appid", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let got = client
            .fetch(Endpoint::Current, &city_query("London"))
            .await
            .unwrap();

        assert_eq!(got, payload);
    }

    #[tokio::test]
    async fn test_fetch_forecast_by_coords() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("lat", "51.51"))
            .and(query_param("lon", "-0.13"))
            .and(query_param("appid", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"cnt": 40})))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let query = WeatherQuery {
            lat: Some(51.51),
            lon: Some(-0.13),
            ..Default::default()
        };
        let got = client.fetch(Endpoint::Forecast, &query).await.unwrap();

        assert_eq!(got["cnt"], 40);
    }

    #[tokio::test]
    async fn test_non_success_status_is_upstream_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client
            .fetch(Endpoint::Current, &city_query("London"))
            .await
            .unwrap_err();

        match err {
            AppError::Upstream { message, .. } => assert!(message.contains("HTTP error")),
            other => panic!("Expected Upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_body_is_upstream_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client
            .fetch(Endpoint::Current, &city_query("London"))
            .await
            .unwrap_err();

        match err {
            AppError::Upstream { message, .. } => assert!(message.contains("invalid JSON")),
            other => panic!("Expected Upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_upstream_error() {
        // Nothing listens on this port.
        let client = test_client("http://127.0.0.1:9");
        let err = client
            .fetch(Endpoint::Current, &city_query("London"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Upstream { .. }));
    }

    #[tokio::test]
    #[ignore = "requires network access and a real API key"]
    async fn test_fetch_real_api() {
        let api_key = std::env::var("OPENWEATHER_API_KEY").unwrap();
        let client = OpenWeatherClient::new(&UpstreamConfig {
            api_key,
            ..Default::default()
        })
        .unwrap();

        let got = client
            .fetch(Endpoint::Current, &city_query("London"))
            .await
            .unwrap();
        assert_eq!(got["name"], "London");
    }
}
