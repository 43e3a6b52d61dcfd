#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use futures::future::LocalBoxFuture;
use leptos::prelude::*;

use crate::api::TransportError;
use crate::models::{AskResponse, Message};

/// Swappable transport: maps a question to a resolved answer or failure.
/// The production implementation is [`crate::api::http_transport`]; tests
/// substitute closures.
///
/// The closure itself must be thread-safe because the store lives in
/// Leptos context, whose bounds require `Send + Sync`; the returned
/// future stays local to the single-threaded event loop.
pub type Transport = Arc<
    dyn Fn(String) -> LocalBoxFuture<'static, Result<AskResponse, TransportError>> + Send + Sync,
>;

/// The conversation state machine, provided via Leptos context.
///
/// Owns the transcript and the pending flag; it is their single writer.
/// Components read both through the `ArcReadSignal` accessors and mutate
/// only through [`ConversationStore::submit`].
#[derive(Clone)]
pub struct ConversationStore {
    transcript: ArcRwSignal<Vec<Message>>,
    pending: ArcRwSignal<bool>,
    transport: Transport,
}

impl ConversationStore {
    pub fn new(transport: Transport) -> Self {
        Self {
            transcript: ArcRwSignal::new(Vec::new()),
            pending: ArcRwSignal::new(false),
            transport,
        }
    }

    /// Create the store and provide it in the current Leptos context.
    pub fn provide(transport: Transport) -> Self {
        let store = Self::new(transport);
        provide_context(store.clone());
        store
    }

    /// Read-only view of the transcript, in chronological order.
    pub fn transcript(&self) -> ArcReadSignal<Vec<Message>> {
        self.transcript.read_only()
    }

    /// Read-only view of the request status; `true` while a question is
    /// in flight.
    pub fn pending(&self) -> ArcReadSignal<bool> {
        self.pending.read_only()
    }

    /// Submit a question to the answering service.
    ///
    /// A no-op when the trimmed text is empty or a request is already
    /// pending. Otherwise appends the user message, holds `pending` for
    /// the duration of the single transport call, and appends exactly one
    /// assistant message when it resolves, success or failure.
    ///
    /// The gate, the user append, and the pending transition all happen
    /// before the first await, so a second `submit` polled at any point
    /// while this one is unresolved hits the gate and drops out.
    pub async fn submit(&self, text: &str) {
        let question = text.trim();
        if question.is_empty() || self.pending.get_untracked() {
            return;
        }
        let question = question.to_owned();

        self.transcript
            .update(|entries| entries.push(Message::user(question.clone())));
        self.pending.set(true);

        let reply = match (self.transport)(question).await {
            Ok(resp) => Message::assistant(resp.answer, resp.sources),
            Err(err) => {
                log::error!("Failed to fetch answer: {err}");
                Message::assistant(format!("⚠ {err}"), Vec::new())
            }
        };

        self.transcript.update(|entries| entries.push(reply));
        self.pending.set(false);
    }
}
