// src/cli/run.rs - Serve the bot

use std::sync::Arc;

use crate::bot::menu::BOT_COMMANDS;
use crate::bot::{BotRunner, ConversationController};
use crate::infra::config::Config;
use crate::integrations::credentials::BotCredentials;
use crate::integrations::telegram::TelegramAdapter;
use crate::weather::WeatherApiClient;

/// Validate credentials, then poll Telegram until Ctrl+C.
pub async fn run_bot(config: &Config) -> anyhow::Result<()> {
    let creds = BotCredentials::from_env()?;

    let telegram = TelegramAdapter::new(creds.telegram_token.clone(), &config.telegram);
    let identity = telegram.validate().await?;
    tracing::info!("Authenticated with Telegram as {}", identity);

    if config.telegram.register_commands {
        if let Err(e) = telegram.set_commands(&BOT_COMMANDS).await {
            tracing::warn!("Could not register bot commands: {}", e);
        }
    }

    let weather = Arc::new(WeatherApiClient::new(creds.weather_api_key, &config.weather));
    let controller = Arc::new(ConversationController::new(
        weather,
        config.weather.lang.clone(),
    ));

    let runner = BotRunner::new(Arc::new(telegram), controller);
    tracing::info!("Bot started, polling for updates");

    runner
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await?;

    tracing::info!("Bot stopped");
    Ok(())
}
