//! Chat transcript types for the per-file explanation conversation.

use serde::{Deserialize, Serialize};

/// Who produced a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The person asking about the code.
    User,
    /// The language model's reply.
    Assistant,
}

/// One question or answer in a transcript.
///
/// Serializes as `{"role": …, "content": …}`, the shape the explain relay
/// and the chat-completion API both use for conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Who spoke.
    #[serde(rename = "role")]
    pub speaker: Speaker,
    /// What they said.
    #[serde(rename = "content")]
    pub text: String,
}

impl ChatTurn {
    /// A turn spoken by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    /// A turn spoken by the assistant.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }
}

/// The ordered record of question/answer turns for the currently selected
/// file. Append-only during a session; cleared in full whenever a new file
/// is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
}

impl Transcript {
    /// An empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user turn.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(ChatTurn::user(text));
    }

    /// Append an assistant turn.
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.turns.push(ChatTurn::assistant(text));
    }

    /// Drop every turn.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the transcript has no turns.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The turns in order.
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// The most recent turn, if any.
    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }
}
