//! Start command handler
//!
//! Greets the user and attaches the main menu.

use crate::content::texts;
use crate::models::{Keyboard, Reply};

/// Handle /start command
pub fn handle_start() -> Vec<Reply> {
    vec![Reply::rich(texts::WELCOME).with_keyboard(Keyboard::Menu)]
}
