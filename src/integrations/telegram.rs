// src/integrations/telegram.rs - Telegram adapter (Bot API)
//
// Uses the Telegram Bot API (https://core.telegram.org/bots/api)
// with getUpdates long polling.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::infra::config::TelegramConfig;
use crate::infra::errors::BotError;
use crate::integrations::types::{
    ChatTransport, InboundUpdate, IncomingMessage, Reply, ReplyKeyboard, TextFormat,
};

/// Extra time on top of the long-poll timeout before the HTTP request gives up.
const POLL_GRACE_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Telegram integration adapter.
pub struct TelegramAdapter {
    client: Client,
    api_base: String,
    bot_token: String,
    poll_timeout_secs: u64,
}

impl TelegramAdapter {
    pub fn new(bot_token: String, config: &TelegramConfig) -> Self {
        Self {
            client: Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            bot_token,
            poll_timeout_secs: config.poll_timeout_secs,
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.api_base, self.bot_token)
    }

    /// POST a Bot API method and unwrap the `{ok, result, description}` envelope.
    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        body: &serde_json::Value,
        timeout: Duration,
    ) -> Result<T, BotError> {
        let resp: TelegramResponse<T> = self
            .client
            .post(self.api_url(method))
            .json(body)
            .timeout(timeout)
            .send()
            .await?
            .json()
            .await?;

        if !resp.ok {
            let message = resp.description.unwrap_or_else(|| "unknown".into());
            if resp.error_code == Some(401) {
                return Err(BotError::TelegramAuth(message));
            }
            return Err(BotError::Telegram {
                method: method.to_string(),
                message,
            });
        }

        resp.result.ok_or_else(|| BotError::Telegram {
            method: method.to_string(),
            message: "response had no result".into(),
        })
    }

    /// Validate the bot token by calling getMe. Returns the bot's display handle.
    pub async fn validate(&self) -> Result<String, BotError> {
        #[derive(Deserialize)]
        struct BotUser {
            username: Option<String>,
            first_name: Option<String>,
        }

        let bot: BotUser = match self
            .call("getMe", &serde_json::json!({}), self.request_timeout())
            .await
        {
            Ok(bot) => bot,
            Err(BotError::Telegram { message, .. }) => return Err(BotError::TelegramAuth(message)),
            Err(e) => return Err(e),
        };

        Ok(format!(
            "@{}",
            bot.username
                .unwrap_or_else(|| bot.first_name.unwrap_or_default())
        ))
    }

    /// Register the slash-commands shown in the client's command menu.
    pub async fn set_commands(&self, commands: &[(&str, &str)]) -> Result<(), BotError> {
        let commands: Vec<serde_json::Value> = commands
            .iter()
            .map(|(command, description)| {
                serde_json::json!({ "command": command, "description": description })
            })
            .collect();

        let _: bool = self
            .call(
                "setMyCommands",
                &serde_json::json!({ "commands": commands }),
                self.request_timeout(),
            )
            .await?;
        Ok(())
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

// -- Telegram API response types --

#[derive(Deserialize)]
struct TelegramResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
    error_code: Option<i64>,
}

#[derive(Deserialize)]
struct TgUpdate {
    update_id: i64,
    message: Option<TgMessage>,
}

#[derive(Deserialize)]
struct TgMessage {
    chat: TgChat,
    from: Option<TgUser>,
    text: Option<String>,
}

#[derive(Deserialize)]
struct TgChat {
    id: i64,
}

#[derive(Deserialize)]
struct TgUser {
    username: Option<String>,
    first_name: Option<String>,
}

impl From<TgUpdate> for InboundUpdate {
    fn from(u: TgUpdate) -> Self {
        let message = u.message.and_then(|m| {
            let text = m.text?;
            let sender = m
                .from
                .as_ref()
                .and_then(|u| u.username.clone().or(u.first_name.clone()))
                .unwrap_or_else(|| "unknown".into());
            Some(IncomingMessage {
                chat_id: m.chat.id,
                sender,
                text,
            })
        });
        InboundUpdate {
            update_id: u.update_id,
            message,
        }
    }
}

/// Build the `reply_markup` object for sendMessage.
pub(crate) fn reply_markup(keyboard: &ReplyKeyboard) -> serde_json::Value {
    match keyboard {
        ReplyKeyboard::Show(rows) => {
            let rows: Vec<Vec<serde_json::Value>> = rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|label| serde_json::json!({ "text": label }))
                        .collect()
                })
                .collect();
            serde_json::json!({ "keyboard": rows, "resize_keyboard": true })
        }
        ReplyKeyboard::Remove => serde_json::json!({ "remove_keyboard": true }),
    }
}

pub(crate) fn send_message_body(chat_id: i64, reply: &Reply) -> serde_json::Value {
    let mut body = serde_json::json!({
        "chat_id": chat_id,
        "text": reply.text,
        "reply_markup": reply_markup(&reply.keyboard),
    });
    if reply.format == TextFormat::Html {
        body["parse_mode"] = serde_json::json!("HTML");
    }
    body
}

// -- ChatTransport implementation --

#[async_trait]
impl ChatTransport for TelegramAdapter {
    async fn poll(&self, offset: Option<i64>) -> Result<Vec<InboundUpdate>, BotError> {
        let mut body = serde_json::json!({
            "timeout": self.poll_timeout_secs,
            "allowed_updates": ["message"],
        });
        if let Some(offset) = offset {
            body["offset"] = serde_json::json!(offset);
        }

        let updates: Vec<TgUpdate> = self
            .call(
                "getUpdates",
                &body,
                Duration::from_secs(self.poll_timeout_secs + POLL_GRACE_SECS),
            )
            .await?;

        Ok(updates.into_iter().map(InboundUpdate::from).collect())
    }

    async fn send(&self, chat_id: i64, reply: &Reply) -> Result<(), BotError> {
        let _: serde_json::Value = self
            .call(
                "sendMessage",
                &send_message_body(chat_id, reply),
                self.request_timeout(),
            )
            .await?;
        Ok(())
    }

    async fn acknowledge(&self, offset: i64) -> Result<(), BotError> {
        // A zero-timeout getUpdates with the new offset confirms everything before it.
        let body = serde_json::json!({ "offset": offset, "timeout": 0, "limit": 1 });
        let _: Vec<serde_json::Value> = self
            .call("getUpdates", &body, self.request_timeout())
            .await?;
        Ok(())
    }
}
