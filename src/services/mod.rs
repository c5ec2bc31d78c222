//! Service layer for business logic operations.

mod weather_service;

pub use weather_service::{WeatherReport, WeatherService, cache_key};

use crate::cache::CacheManager;
use crate::external::openweather::OpenWeatherClient;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since the underlying clients use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub weather: WeatherService,
}

impl Services {
    /// Creates a new Services instance from the shared cache and upstream client.
    pub fn new(cache: CacheManager, upstream: OpenWeatherClient) -> Self {
        Self {
            weather: WeatherService::new(cache, upstream),
        }
    }
}
