//! Conversation transcript shown in the chat view.

use chrono::{DateTime, Local};

use crate::core::format::{DisplayBlock, format_message};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    /// Placeholder shown while a request runs; replaced when it finishes.
    pub loading: bool,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    fn new(role: Role, text: impl Into<String>, loading: bool) -> Self {
        Self {
            role,
            text: text.into(),
            loading,
            sent_at: Local::now(),
        }
    }

    /// Display blocks for this message, recomputed on every call.
    pub fn blocks(&self) -> Vec<DisplayBlock> {
        format_message(&self.text)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Drop everything and start over with one assistant message.
    pub fn reset_with(&mut self, text: &str) {
        self.messages.clear();
        self.push_assistant(text);
    }

    pub fn push_user(&mut self, text: &str) {
        self.messages.push(ChatMessage::new(Role::User, text, false));
    }

    pub fn push_assistant(&mut self, text: &str) {
        self.messages
            .push(ChatMessage::new(Role::Assistant, text, false));
    }

    pub fn push_loading(&mut self, text: &str) {
        self.messages.push(ChatMessage::new(Role::Assistant, text, true));
    }

    /// Remove loading placeholders, then append the final assistant message.
    pub fn resolve_loading(&mut self, text: &str) {
        self.messages.retain(|m| !m.loading);
        self.push_assistant(text);
    }

    pub fn is_loading(&self) -> bool {
        self.messages.iter().any(|m| m.loading)
    }
}
