//! Chat assistant widget state.
//!
//! DESIGN
//! ======
//! The transcript is append-only. The one in-place edit is clearing an error
//! message's `retryable` flag when its "Try again" action is used. At most
//! one request is in flight, identified by a [`ChatTicket`]. Closing the
//! panel releases the slot, so a reply that lands after the panel was
//! dismissed no longer matches and is dropped instead of appended.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::config::RETRY_BUDGET;
use crate::net::error::ApiError;

/// Assistant greeting seeded on the first open.
pub const GREETING: &str = "Hi there! I am Jimmy. Ask me anything about Ink Over Matter or tattoos.";

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";
pub const SERVER_ERROR_MESSAGE: &str = "Sorry, there was an error processing your request.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
    Error,
}

impl ChatRole {
    /// CSS modifier for the message bubble.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::User => "chat-message--user",
            Self::Assistant => "chat-message--assistant",
            Self::Error => "chat-message--error",
        }
    }
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    /// Offers "Try again" while set.
    pub retryable: bool,
    origin: Option<Attempt>,
}

impl ChatMessage {
    fn plain(role: ChatRole, content: impl Into<String>) -> Self {
        Self { role, content: content.into(), retryable: false, origin: None }
    }
}

/// The user text behind a request and how many times it was resubmitted.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Attempt {
    text: String,
    retries: u32,
}

/// Proof of the single outstanding chat request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatTicket {
    seq: u64,
}

#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
    seeded: bool,
    pending: Option<(ChatTicket, Attempt)>,
    next_seq: u64,
}

impl ChatState {
    /// Open or close the panel. The first open seeds the greeting; closing
    /// keeps the transcript but abandons any outstanding request.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            if !self.seeded {
                self.seeded = true;
                self.messages.push(ChatMessage::plain(ChatRole::Assistant, GREETING));
            }
        } else {
            self.pending = None;
        }
    }

    /// `true` while a reply is awaited; input and send are disabled.
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    /// Append the user's message and claim the request slot. Returns the text
    /// to post, or `None` for blank input or while another request is out.
    pub fn send(&mut self, text: &str) -> Option<(ChatTicket, String)> {
        let text = text.trim();
        if text.is_empty() || self.pending.is_some() {
            return None;
        }
        self.messages.push(ChatMessage::plain(ChatRole::User, text));
        Some(self.dispatch(Attempt { text: text.to_owned(), retries: 0 }))
    }

    /// Resubmit the original text behind the error message at `index`.
    /// Consumes that message's retry offer; no user message is appended.
    pub fn retry(&mut self, index: usize) -> Option<(ChatTicket, String)> {
        if self.pending.is_some() {
            return None;
        }
        let message = self.messages.get_mut(index)?;
        if !message.retryable {
            return None;
        }
        let origin = message.origin.clone()?;
        message.retryable = false;
        Some(self.dispatch(Attempt { text: origin.text, retries: origin.retries + 1 }))
    }

    /// Apply the outcome of the request identified by `ticket`. Returns
    /// `false` when the outcome was stale and dropped.
    pub fn finish(&mut self, ticket: ChatTicket, outcome: Result<String, ApiError>) -> bool {
        let Some((_, attempt)) = self.pending.take_if(|(current, _)| *current == ticket) else {
            return false;
        };

        let message = match outcome {
            Ok(reply) => ChatMessage::plain(ChatRole::Assistant, reply),
            Err(err) => ChatMessage {
                role: ChatRole::Error,
                content: error_text(&err),
                retryable: attempt.retries < RETRY_BUDGET,
                origin: Some(attempt),
            },
        };
        self.messages.push(message);
        true
    }

    fn dispatch(&mut self, attempt: Attempt) -> (ChatTicket, String) {
        self.next_seq += 1;
        let ticket = ChatTicket { seq: self.next_seq };
        let text = attempt.text.clone();
        self.pending = Some((ticket, attempt));
        (ticket, text)
    }
}

/// Transcript text for a failed request.
#[must_use]
pub fn error_text(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) => NETWORK_ERROR_MESSAGE.to_owned(),
        ApiError::Rejected { message, .. } => message.clone(),
        ApiError::Status { .. } | ApiError::Decode(_) => SERVER_ERROR_MESSAGE.to_owned(),
    }
}
