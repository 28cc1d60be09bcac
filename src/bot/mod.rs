// src/bot/mod.rs - Conversation layer

pub mod controller;
pub mod menu;
pub mod render;
pub mod runner;
pub mod session;

pub use controller::ConversationController;
pub use runner::BotRunner;
pub use session::{ConversationState, Mode, Session};
