// src/cli/check.rs - Credential check

use crate::infra::config::Config;
use crate::integrations::credentials::BotCredentials;
use crate::integrations::telegram::TelegramAdapter;
use crate::weather::{WeatherApiClient, WeatherError, WeatherProvider};

/// Probe both upstream services with the configured credentials.
pub async fn run_check(config: &Config) -> anyhow::Result<()> {
    let creds = BotCredentials::from_env()?;

    let telegram = TelegramAdapter::new(creds.telegram_token.clone(), &config.telegram);
    let identity = telegram.validate().await?;
    println!("  Telegram:   ok ({identity})");

    let weather = WeatherApiClient::new(creds.weather_api_key, &config.weather);
    match weather.search("London").await {
        // NotFound still proves the key was accepted.
        Ok(_) | Err(WeatherError::NotFound { .. }) => {
            println!("  Weather:    ok ({})", config.weather.base_url);
        }
        Err(e @ WeatherError::Network(_)) => {
            println!("  Weather:    FAILED");
            return Err(e.into());
        }
    }

    Ok(())
}
