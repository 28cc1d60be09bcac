// src/integrations/types.rs - Chat transport trait and message types

use async_trait::async_trait;

use crate::infra::errors::BotError;

/// A text message received from a chat.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingMessage {
    pub chat_id: i64,
    pub sender: String,
    pub text: String,
}

/// One polled update. Non-text updates carry no message but still advance the offset.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundUpdate {
    pub update_id: i64,
    pub message: Option<IncomingMessage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Plain,
    Html,
}

/// What happens to the reply keyboard when a message is delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyKeyboard {
    /// Show a keyboard with these rows of button labels.
    Show(Vec<Vec<String>>),
    /// Hide whatever keyboard is currently shown.
    Remove,
}

/// An outbound chat message.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub format: TextFormat,
    pub keyboard: ReplyKeyboard,
}

impl Reply {
    /// Plain-text reply that hides the keyboard.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Plain,
            keyboard: ReplyKeyboard::Remove,
        }
    }

    /// HTML reply that hides the keyboard.
    pub fn html(text: impl Into<String>) -> Self {
        Self {
            format: TextFormat::Html,
            ..Self::plain(text)
        }
    }

    /// Builder: attach a keyboard.
    pub fn with_keyboard(mut self, rows: Vec<Vec<String>>) -> Self {
        self.keyboard = ReplyKeyboard::Show(rows);
        self
    }

    pub fn has_keyboard(&self) -> bool {
        matches!(self.keyboard, ReplyKeyboard::Show(_))
    }
}

/// Adapter for a chat platform: receives updates and delivers replies.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Fetch updates with an id >= `offset`. May block for a long-poll interval.
    async fn poll(&self, offset: Option<i64>) -> Result<Vec<InboundUpdate>, BotError>;

    async fn send(&self, chat_id: i64, reply: &Reply) -> Result<(), BotError>;

    /// Confirm every update below `offset` so it is not redelivered after restart.
    async fn acknowledge(&self, _offset: i64) -> Result<(), BotError> {
        Ok(())
    }
}
