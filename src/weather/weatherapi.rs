// src/weather/weatherapi.rs - weatherapi.com client
//
// Uses the search.json and current.json endpoints
// (https://www.weatherapi.com/docs/).

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use super::{CurrentWeather, Location, SearchResult, WeatherError, WeatherProvider, SEARCH_LIMIT};
use crate::infra::config::WeatherConfig;

/// weatherapi.com error code for "No matching location found."
const NO_MATCHING_LOCATION: u32 = 1006;

pub struct WeatherApiClient {
    client: Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl WeatherApiClient {
    pub fn new(api_key: String, config: &WeatherConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &str,
        extra: &[(&str, &str)],
    ) -> Result<T, WeatherError> {
        let resp = self
            .client
            .get(format!("{}/{endpoint}", self.base_url))
            .query(&[("key", self.api_key.as_str()), ("q", query)])
            .query(extra)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| WeatherError::Network(format!("{endpoint}: {e}")))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| WeatherError::Network(format!("{endpoint}: {e}")))?;

        if !status.is_success() {
            return Err(classify_error(status, &body, query));
        }

        serde_json::from_str(&body)
            .map_err(|e| WeatherError::Network(format!("malformed {endpoint} payload: {e}")))
    }
}

// -- weatherapi.com response types --

#[derive(Deserialize)]
struct CurrentResp {
    location: ApiLocation,
    current: ApiCurrent,
}

#[derive(Deserialize)]
struct ApiLocation {
    name: String,
}

#[derive(Deserialize)]
struct ApiCurrent {
    temp_c: f64,
    humidity: i64,
    wind_kph: f64,
    condition: ApiCondition,
}

#[derive(Deserialize)]
struct ApiCondition {
    text: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    code: u32,
    message: String,
}

/// Map a non-success response to a typed failure.
fn classify_error(status: StatusCode, body: &str, query: &str) -> WeatherError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(env) if env.error.code == NO_MATCHING_LOCATION => WeatherError::not_found(query),
        Ok(env) => WeatherError::Network(format!(
            "HTTP {status}: {} (code {})",
            env.error.message, env.error.code
        )),
        Err(_) => WeatherError::Network(format!("HTTP {status}")),
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    async fn search(&self, query: &str) -> Result<SearchResult, WeatherError> {
        let mut locations: Vec<Location> = self.fetch("search.json", query, &[]).await?;
        if locations.is_empty() {
            return Err(WeatherError::not_found(query));
        }
        locations.truncate(SEARCH_LIMIT);
        Ok(locations)
    }

    async fn current(&self, query: &str, lang: &str) -> Result<CurrentWeather, WeatherError> {
        let resp: CurrentResp = self
            .fetch("current.json", query, &[("lang", lang)])
            .await?;

        Ok(CurrentWeather {
            location_name: resp.location.name,
            temperature_c: resp.current.temp_c,
            humidity_pct: resp.current.humidity,
            wind_kph: resp.current.wind_kph,
            condition_text: resp.current.condition.text,
        })
    }
}
