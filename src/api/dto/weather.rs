//! Weather DTOs for API responses.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::services::WeatherReport;

/// Success envelope for weather lookups.
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "success": true,
    "message": "Weather data fetched successfully",
    "data": {"name": "London", "main": {"temp": 280.32}}
}))]
pub struct WeatherResponse {
    /// Always `true` on success
    pub success: bool,
    /// Outcome description; notes when the payload came from the cache
    pub message: String,
    /// Opaque provider payload
    #[schema(value_type = Object)]
    pub data: Value,
}

impl From<WeatherReport> for WeatherResponse {
    fn from(report: WeatherReport) -> Self {
        let message = if report.from_cache {
            "Weather data fetched successfully from cache"
        } else {
            "Weather data fetched successfully"
        };
        Self {
            success: true,
            message: message.to_string(),
            data: report.data,
        }
    }
}
