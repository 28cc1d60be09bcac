// src/integrations/mod.rs - Chat platform layer

pub mod credentials;
pub mod telegram;
pub mod types;

pub use credentials::BotCredentials;
pub use types::{ChatTransport, InboundUpdate, IncomingMessage, Reply, ReplyKeyboard, TextFormat};
