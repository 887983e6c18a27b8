//! Outbound reply model

use serde::{Deserialize, Serialize};

/// Keyboard attachment for a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Keyboard {
    /// Leave whatever keyboard the client shows
    #[default]
    Keep,
    /// Attach the main menu
    Menu,
    /// Hide the reply keyboard
    Remove,
}

/// One message to send back to the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub keyboard: Keyboard,
    /// Render `text` as Telegram HTML
    pub rich: bool,
    pub disable_link_preview: bool,
}

impl Reply {
    /// Plain text reply without keyboard changes
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: Keyboard::Keep,
            rich: false,
            disable_link_preview: false,
        }
    }

    /// HTML-formatted reply
    pub fn rich(text: impl Into<String>) -> Self {
        Self {
            rich: true,
            ..Self::text(text)
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = keyboard;
        self
    }

    pub fn without_link_preview(mut self) -> Self {
        self.disable_link_preview = true;
        self
    }
}
