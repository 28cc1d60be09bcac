// src/weather/types.rs - Weather domain types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One candidate returned by a city search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
}

impl Location {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: Some(country.into()),
        }
    }
}

/// Search candidates in provider relevance order, at most [`super::SEARCH_LIMIT`] long.
pub type SearchResult = Vec<Location>;

/// Current conditions for a single location.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub location_name: String,
    pub temperature_c: f64,
    pub humidity_pct: i64,
    pub wind_kph: f64,
    pub condition_text: String,
}

#[derive(Error, Debug)]
pub enum WeatherError {
    /// The provider had nothing for the query.
    #[error("No location matches '{query}'")]
    NotFound { query: String },

    /// Transport failure, timeout, error status, or a payload we could not read.
    #[error("Weather API request failed: {0}")]
    Network(String),
}

impl WeatherError {
    pub fn not_found(query: &str) -> Self {
        WeatherError::NotFound {
            query: query.to_string(),
        }
    }
}
