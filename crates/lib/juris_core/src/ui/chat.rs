//! Chat widget state machine.
//!
//! Two states: [`ChatState::Idle`] and [`ChatState::AwaitingReply`]. Only
//! `submit` leaves `Idle`; only `receive_reply` / `receive_failure` leave
//! `AwaitingReply`. Input disabling and the loading indicator are derived
//! from the state, never tracked separately.

use thiserror::Error;

use super::courts::CourtSelection;
use crate::models::{ChatRequest, ChatResponse, Message, SearchResult};

/// Shown in place of a reply when the request fails.
pub const FAILURE_REPLY: &str =
    "Desculpe, ocorreu um erro ao processar sua solicitação. Por favor, tente novamente.";

/// Where the widget is in its request cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatState {
    #[default]
    Idle,
    AwaitingReply,
}

impl ChatState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatState::Idle => "idle",
            ChatState::AwaitingReply => "awaiting-reply",
        }
    }
}

/// Why `submit` did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("input is empty")]
    EmptyInput,
    #[error("a reply is still pending")]
    AwaitingReply,
}

/// Conversation, pending input and the last search results of one page view.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<Message>,
    input: String,
    state: ChatState,
    results: Vec<SearchResult>,
    scroll_pending: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.state == ChatState::AwaitingReply
    }

    /// The text field is read-only while a reply is pending.
    pub fn input_disabled(&self) -> bool {
        self.is_awaiting_reply()
    }

    pub fn can_send(&self) -> bool {
        self.state == ChatState::Idle && !self.input.trim().is_empty()
    }

    /// The greeting is shown until the first message.
    pub fn show_greeting(&self) -> bool {
        self.messages.is_empty()
    }

    /// Idle → AwaitingReply. Appends the trimmed input as a user message,
    /// clears the input and returns the request to send.
    pub fn submit(&mut self, selection: &CourtSelection) -> Result<ChatRequest, SubmitRejected> {
        if self.state == ChatState::AwaitingReply {
            return Err(SubmitRejected::AwaitingReply);
        }
        let text = self.input.trim();
        if text.is_empty() {
            return Err(SubmitRejected::EmptyInput);
        }

        let message = Message::user(text);
        self.input.clear();
        self.push(message);
        self.state = ChatState::AwaitingReply;

        Ok(ChatRequest {
            messages: self.messages.clone(),
            courts: selection.request_courts(),
        })
    }

    /// AwaitingReply → Idle with the assistant's answer. Results replace the
    /// previous list whenever the response carries the field, even when it is
    /// empty. Returns `false` (and
    /// changes nothing) when no reply was pending.
    pub fn receive_reply(&mut self, response: ChatResponse) -> bool {
        if self.state != ChatState::AwaitingReply {
            return false;
        }
        self.push(Message::assistant(response.message));
        if let Some(results) = response.results {
            self.results = results;
        }
        self.state = ChatState::Idle;
        true
    }

    /// AwaitingReply → Idle with the apology message. The user's message stays.
    pub fn receive_failure(&mut self) -> bool {
        if self.state != ChatState::AwaitingReply {
            return false;
        }
        self.push(Message::assistant(FAILURE_REPLY));
        self.state = ChatState::Idle;
        true
    }

    /// Whether the view should scroll to the newest message. Clears the flag.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }

    fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.scroll_pending = true;
    }
}
