//! Inbound message model

use serde::{Deserialize, Serialize};

/// Conversation identifier (the Telegram chat id)
pub type ConversationId = i64;

/// Who wrote the message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    pub id: i64,
    pub full_name: String,
}

impl Sender {
    pub fn new(id: i64, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
        }
    }
}

/// A single inbound message, already reduced to its text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inbound {
    pub text: String,
    pub sender: Sender,
}

impl Inbound {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            text: text.into(),
            sender,
        }
    }
}
