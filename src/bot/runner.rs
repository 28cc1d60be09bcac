// src/bot/runner.rs - Update polling loop and per-chat workers
//
// The poll loop fans updates out to one worker task per chat. Each worker
// owns its chat's Session and handles that chat's messages one at a time,
// so a chat never has two weather requests in flight while other chats
// proceed concurrently.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::bot::controller::ConversationController;
use crate::bot::session::Session;
use crate::infra::errors::BotError;
use crate::integrations::types::{ChatTransport, IncomingMessage};
use crate::util::truncate_for_log;

/// Pause after a failed poll before trying again.
const POLL_ERROR_PAUSE: Duration = Duration::from_secs(3);

// Worker queues are unbounded: a backlog in one chat must never hold up the
// poll loop and with it every other chat.
struct ChatWorker {
    tx: mpsc::UnboundedSender<IncomingMessage>,
    handle: JoinHandle<()>,
}

pub struct BotRunner {
    transport: Arc<dyn ChatTransport>,
    controller: Arc<ConversationController>,
    workers: HashMap<i64, ChatWorker>,
    offset: Option<i64>,
}

impl BotRunner {
    pub fn new(transport: Arc<dyn ChatTransport>, controller: Arc<ConversationController>) -> Self {
        Self {
            transport,
            controller,
            workers: HashMap::new(),
            offset: None,
        }
    }

    /// Poll and dispatch until `shutdown` resolves or the transport reports a
    /// fatal error. Queued messages are drained before returning.
    pub async fn run(mut self, shutdown: impl Future<Output = ()>) -> Result<(), BotError> {
        tokio::pin!(shutdown);
        let mut outcome = Ok(());

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested, stopping update polling");
                    break;
                }
                polled = self.transport.poll(self.offset) => match polled {
                    Ok(updates) => {
                        for update in updates {
                            self.offset = Some(update.update_id + 1);
                            if let Some(message) = update.message {
                                self.dispatch(message);
                            }
                        }
                    }
                    Err(e) if e.is_fatal() => {
                        tracing::error!("Polling stopped: {}", e);
                        outcome = Err(e);
                        break;
                    }
                    Err(e) => {
                        tracing::warn!("Polling updates failed: {}", e);
                        tokio::time::sleep(POLL_ERROR_PAUSE).await;
                    }
                }
            }
        }

        self.finish().await;
        outcome
    }

    fn dispatch(&mut self, message: IncomingMessage) {
        let chat_id = message.chat_id;
        let transport = self.transport.clone();
        let controller = self.controller.clone();

        let worker = self
            .workers
            .entry(chat_id)
            .or_insert_with(|| spawn_worker(chat_id, transport.clone(), controller.clone()));
        let Err(mpsc::error::SendError(message)) = worker.tx.send(message) else {
            return;
        };

        // The worker task died (a panic in a handler). Its session is gone, so
        // the chat starts over with a fresh one and still gets this message.
        tracing::warn!("[{}] chat worker stopped, starting a new session", chat_id);
        let fresh = spawn_worker(chat_id, transport, controller);
        if fresh.tx.send(message).is_err() {
            tracing::error!("[{}] new chat worker rejected the message", chat_id);
        }
        self.workers.insert(chat_id, fresh);
    }

    async fn finish(self) {
        let handles: Vec<JoinHandle<()>> = self
            .workers
            .into_values()
            .map(|w| {
                drop(w.tx);
                w.handle
            })
            .collect();

        for handle in handles {
            if let Err(e) = handle.await {
                tracing::warn!("Chat worker ended abnormally: {}", e);
            }
        }

        if let Some(offset) = self.offset {
            if let Err(e) = self.transport.acknowledge(offset).await {
                tracing::warn!("Could not acknowledge updates before {}: {}", offset, e);
            }
        }
    }
}

fn spawn_worker(
    chat_id: i64,
    transport: Arc<dyn ChatTransport>,
    controller: Arc<ConversationController>,
) -> ChatWorker {
    let (tx, mut rx) = mpsc::unbounded_channel::<IncomingMessage>();

    let handle = tokio::spawn(async move {
        let mut session = Session::new(chat_id);
        tracing::debug!("[{}] new chat session", chat_id);

        while let Some(message) = rx.recv().await {
            tracing::info!(
                "[{}] {}: {}",
                chat_id,
                message.sender,
                truncate_for_log(&message.text, 80)
            );

            let Some(reply) = controller.handle(&mut session, &message.text).await else {
                continue;
            };
            if let Err(e) = transport.send(chat_id, &reply).await {
                tracing::warn!("[{}] failed to deliver reply: {}", chat_id, e);
            }
        }
    });

    ChatWorker { tx, handle }
}
