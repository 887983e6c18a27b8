//! Main menu
//!
//! Three reply-keyboard buttons. A label only acts as a menu choice while
//! the conversation is idle; inside a flow it is just an answer.

use teloxide::types::{KeyboardButton, KeyboardMarkup};
use crate::content::texts;
use crate::models::Reply;

/// Menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    Consultation,
    Question,
    About,
}

impl MenuOption {
    /// Menu order, top to bottom
    pub const ALL: [MenuOption; 3] = [MenuOption::Consultation, MenuOption::Question, MenuOption::About];

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Consultation => texts::MENU_CONSULTATION,
            MenuOption::Question => texts::MENU_QUESTION,
            MenuOption::About => texts::MENU_ABOUT,
        }
    }

    /// Exact label match, no trimming or case folding
    pub fn from_label(text: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.label() == text)
    }
}

/// Reply keyboard with one button per row
pub fn menu_keyboard() -> KeyboardMarkup {
    let rows: Vec<Vec<KeyboardButton>> = MenuOption::ALL
        .iter()
        .map(|option| vec![KeyboardButton::new(option.label())])
        .collect();

    KeyboardMarkup::new(rows).resize_keyboard()
}

/// Static "about us" page
pub fn handle_about() -> Vec<Reply> {
    vec![Reply::rich(texts::ABOUT).without_link_preview()]
}
