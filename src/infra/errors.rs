// src/infra/errors.rs - Error types for the bot process

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    // Startup errors (fatal)
    #[error("Missing credential: set {name} in the environment or .env")]
    MissingCredential { name: &'static str },

    #[error("Telegram rejected the bot token: {0}")]
    TelegramAuth(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // Transport errors (recoverable)
    #[error("Telegram {method} failed: {message}")]
    Telegram { method: String, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl BotError {
    /// Errors after which the bot cannot keep serving.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            BotError::MissingCredential { .. } | BotError::TelegramAuth(_) | BotError::Config(_)
        )
    }
}
