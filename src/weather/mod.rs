// src/weather/mod.rs - Weather provider abstraction

pub mod types;
pub mod weatherapi;

use async_trait::async_trait;

pub use types::{CurrentWeather, Location, SearchResult, WeatherError};
pub use weatherapi::WeatherApiClient;

/// Maximum number of search candidates ever shown to a user.
pub const SEARCH_LIMIT: usize = 5;

/// Source of weather data. One outbound request per call, no retries.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fuzzy city lookup. An empty match list is `NotFound`.
    async fn search(&self, query: &str) -> Result<SearchResult, WeatherError>;

    /// Current conditions for an exact location query.
    async fn current(&self, query: &str, lang: &str) -> Result<CurrentWeather, WeatherError>;
}
