//! Help command handler

use teloxide::utils::command::BotCommands;
use crate::content::texts;
use crate::handlers::menu::MenuOption;
use crate::models::Reply;
use super::Command;

/// Handle /help command
pub fn handle_help() -> Vec<Reply> {
    let menu: Vec<String> = MenuOption::ALL
        .iter()
        .map(|option| format!("• {}", option.label()))
        .collect();

    let help_text = format!(
        "{}\n\n{}\n\n{}",
        texts::HELP_HEADER,
        Command::descriptions(),
        menu.join("\n"),
    );

    vec![Reply::text(help_text)]
}
