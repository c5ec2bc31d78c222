use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};

/// Upstream endpoint selector.
///
/// Determines the provider path segment and namespaces cache keys so a
/// current-conditions entry can never satisfy a forecast lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Current,
    Forecast,
}

impl Endpoint {
    /// Path segment used by the provider API.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Endpoint::Current => "weather",
            Endpoint::Forecast => "forecast",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Inbound weather query.
///
/// A location can be identified by city name, coordinate pair, or postal
/// code. When several are present, city name wins over the coordinate pair,
/// which wins over the postal code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeatherQuery {
    /// City name, e.g. "London" or "London,uk"
    pub q: Option<String>,
    /// Latitude; must be paired with `lon`
    pub lat: Option<f64>,
    /// Longitude; must be paired with `lat`
    pub lon: Option<f64>,
    /// Postal code, e.g. "94040,us"
    pub zip: Option<String>,
}

impl WeatherQuery {
    /// Checks the identifying-parameter rules.
    ///
    /// Pure: no side effects, no I/O. Called by the service before any
    /// cache or origin access.
    pub fn validate(&self) -> AppResult<()> {
        if self.lat.is_some() != self.lon.is_some() {
            return Err(AppError::validation(
                "Both latitude and longitude must be provided together",
            ));
        }
        if self.location().is_none() {
            return Err(AppError::validation(
                "At least one of city name, lat-lon, or zip must be provided",
            ));
        }
        Ok(())
    }

    /// Resolve the identifying parameter, applying the precedence rule.
    ///
    /// Empty strings count as absent, matching how missing query-string
    /// parameters arrive.
    pub fn location(&self) -> Option<Location<'_>> {
        if let Some(q) = self.q.as_deref().filter(|q| !q.is_empty()) {
            return Some(Location::City(q));
        }
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            return Some(Location::Coords { lat, lon });
        }
        if let Some(zip) = self.zip.as_deref().filter(|zip| !zip.is_empty()) {
            return Some(Location::Zip(zip));
        }
        None
    }
}

/// The single identifying parameter a query resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Location<'a> {
    City(&'a str),
    Coords { lat: f64, lon: f64 },
    Zip(&'a str),
}

impl Location<'_> {
    /// Canonical token used in cache keys.
    pub fn cache_token(&self) -> String {
        match self {
            Location::City(q) => (*q).to_string(),
            Location::Coords { lat, lon } => format!("{lat},{lon}"),
            Location::Zip(zip) => (*zip).to_string(),
        }
    }

    /// Query-string pairs sent to the provider.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Location::City(q) => vec![("q", (*q).to_string())],
            Location::Coords { lat, lon } => {
                vec![("lat", lat.to_string()), ("lon", lon.to_string())]
            }
            Location::Zip(zip) => vec![("zip", (*zip).to_string())],
        }
    }
}
