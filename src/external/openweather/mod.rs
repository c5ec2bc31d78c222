//! OpenWeather provider integration: query types and the HTTP client.

mod client;
mod types;

pub use client::OpenWeatherClient;
pub use types::{Endpoint, Location, WeatherQuery};
