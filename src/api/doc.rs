use utoipa::OpenApi;

pub const WEATHER_TAG: &str = "Weather";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stratus",
        description = "A read-through caching gateway for the OpenWeather API",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::external::openweather::Endpoint,
        )
    ),
    tags(
        (name = WEATHER_TAG, description = "Weather lookup endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
