// src/bot/session.rs - Per-chat conversation state

/// Which request a free-text message turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Current,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversationState {
    /// No /start seen yet.
    #[default]
    Idle,
    AwaitingCityInput,
    /// Menu closed; only /start and /help get an answer.
    Closed,
}

/// State for one chat. Owned by the task serving that chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub chat_id: i64,
    pub mode: Mode,
    pub state: ConversationState,
}

impl Session {
    pub fn new(chat_id: i64) -> Self {
        Self {
            chat_id,
            mode: Mode::default(),
            state: ConversationState::default(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == ConversationState::AwaitingCityInput
    }
}
