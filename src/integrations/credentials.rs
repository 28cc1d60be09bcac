// src/integrations/credentials.rs - Secrets from the environment

use crate::infra::errors::BotError;

pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
pub const WEATHER_API_KEY_VAR: &str = "WEATHER_API_KEY";

/// The two secrets the bot needs. Never persisted to disk.
#[derive(Clone)]
pub struct BotCredentials {
    pub telegram_token: String,
    pub weather_api_key: String,
}

impl std::fmt::Debug for BotCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotCredentials")
            .field("telegram_token", &"***")
            .field("weather_api_key", &"***")
            .finish()
    }
}

impl BotCredentials {
    /// Load from the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup. Empty values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BotError> {
        let require = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(BotError::MissingCredential { name })
        };

        let telegram_token = require(TELEGRAM_TOKEN_VAR)?;
        validate_token_format(&telegram_token).map_err(BotError::Config)?;

        Ok(Self {
            telegram_token,
            weather_api_key: require(WEATHER_API_KEY_VAR)?,
        })
    }
}

/// Validate a Telegram token format without making an API call.
pub fn validate_token_format(token: &str) -> Result<(), String> {
    // Telegram tokens look like "1234567890:ABCdefGHIjklMNOpqrsTUVwxyz"
    match token.split_once(':') {
        Some((id, secret)) if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) => {
            if secret.is_empty() {
                Err("Telegram bot token is missing the part after ':'".into())
            } else {
                Ok(())
            }
        }
        _ => Err("Telegram bot tokens should look like '<bot id>:<secret>'".into()),
    }
}
