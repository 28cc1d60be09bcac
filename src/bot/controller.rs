// src/bot/controller.rs - Conversation state machine and request dispatch

use std::sync::Arc;

use crate::bot::menu::{classify, Input, MenuAction};
use crate::bot::render;
use crate::bot::session::{ConversationState, Mode, Session};
use crate::integrations::types::Reply;
use crate::util::truncate_for_log;
use crate::weather::{WeatherError, WeatherProvider};

/// Decides, per inbound text, what to do and what to answer.
///
/// Holds no per-chat state: the caller owns the [`Session`] and passes it in,
/// so one controller serves every chat.
pub struct ConversationController {
    weather: Arc<dyn WeatherProvider>,
    lang: String,
}

impl ConversationController {
    pub fn new(weather: Arc<dyn WeatherProvider>, lang: impl Into<String>) -> Self {
        Self {
            weather,
            lang: lang.into(),
        }
    }

    /// Handle one inbound text. `None` means the message gets no reply.
    ///
    /// Weather failures are rendered here and never returned; the session
    /// stays in `AwaitingCityInput` after them.
    pub async fn handle(&self, session: &mut Session, text: &str) -> Option<Reply> {
        match classify(text) {
            Input::Start => {
                session.state = ConversationState::AwaitingCityInput;
                Some(render::welcome())
            }
            Input::HelpCommand => Some(render::help()),
            Input::UnknownCommand(name) => {
                tracing::debug!("[{}] ignoring unknown command /{}", session.chat_id, name);
                None
            }
            _ if !session.is_active() => {
                tracing::debug!(
                    "[{}] conversation not active ({:?}), ignoring message",
                    session.chat_id,
                    session.state
                );
                None
            }
            Input::Menu(action) => Some(self.select(session, action)),
            Input::Query(query) => Some(self.dispatch(session, query).await),
        }
    }

    fn select(&self, session: &mut Session, action: MenuAction) -> Reply {
        match action {
            MenuAction::WeatherNow => {
                session.mode = Mode::Current;
                render::prompt_city()
            }
            MenuAction::SearchCity => {
                session.mode = Mode::Search;
                render::prompt_search()
            }
            MenuAction::Help => render::help(),
            MenuAction::CloseMenu => {
                session.state = ConversationState::Closed;
                render::menu_hidden()
            }
        }
    }

    async fn dispatch(&self, session: &Session, query: &str) -> Reply {
        let mode = session.mode;
        let result = match mode {
            Mode::Search => self
                .weather
                .search(query)
                .await
                .map(|locations| render::search_results(&locations)),
            Mode::Current => self
                .weather
                .current(query, &self.lang)
                .await
                .map(|weather| render::current_weather(&weather)),
        };

        result.unwrap_or_else(|e| {
            log_failure(session.chat_id, mode, query, &e);
            render::failure(mode, &e)
        })
    }
}

fn log_failure(chat_id: i64, mode: Mode, query: &str, err: &WeatherError) {
    match err {
        WeatherError::NotFound { .. } => tracing::info!(
            "[{}] {:?} lookup found nothing for '{}'",
            chat_id,
            mode,
            truncate_for_log(query, 60)
        ),
        WeatherError::Network(_) => tracing::warn!(
            "[{}] {:?} lookup for '{}' failed: {}",
            chat_id,
            mode,
            truncate_for_log(query, 60),
            err
        ),
    }
}
