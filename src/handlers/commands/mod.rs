//! Command handlers module
//! 
//! Commands are global: they are honoured in every flow state and never
//! change it.

pub mod start;
pub mod help;

use teloxide::utils::command::BotCommands;
use crate::models::Reply;

/// All available bot commands
#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "главное меню")]
    Start,
    #[command(description = "список команд")]
    Help,
}

impl Command {
    /// Recognize a command in raw message text.
    ///
    /// Accepts `/start`, `/start <payload>` (deep links, payload ignored) and
    /// `/start@bot_username`. A command addressed to any other bot, or carrying
    /// a mention while our username is unknown, is plain text.
    pub fn from_text(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let word = text.trim_start().strip_prefix('/')?.split_whitespace().next()?;
        let name = match word.split_once('@') {
            Some((name, mention)) => {
                let ours = bot_username.is_some_and(|username| username.eq_ignore_ascii_case(mention));
                if !ours {
                    return None;
                }
                name
            }
            None => word,
        };

        match name.to_lowercase().as_str() {
            "start" => Some(Command::Start),
            "help" => Some(Command::Help),
            _ => None,
        }
    }
}

/// Main command dispatcher
pub fn handle_command(cmd: Command) -> Vec<Reply> {
    match cmd {
        Command::Start => start::handle_start(),
        Command::Help => help::handle_help(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: Option<&str> = Some("StudyBuddyBot");

    #[test]
    fn test_command_recognition() {
        assert_eq!(Command::from_text("/start", BOT), Some(Command::Start));
        assert_eq!(Command::from_text("/start ref_instagram", BOT), Some(Command::Start));
        assert_eq!(Command::from_text("/start@StudyBuddyBot", BOT), Some(Command::Start));
        assert_eq!(Command::from_text("/help@studybuddybot", BOT), Some(Command::Help));
        assert_eq!(Command::from_text("/HELP", None), Some(Command::Help));
    }

    #[test]
    fn test_commands_for_other_bots_are_text() {
        assert_eq!(Command::from_text("/start@OtherBot", BOT), None);
        assert_eq!(Command::from_text("/help@OtherBot payload", BOT), None);
        assert_eq!(Command::from_text("/start@StudyBuddyBot", None), None);
        assert_eq!(Command::from_text("/start@", BOT), None);
    }

    #[test]
    fn test_non_commands_are_not_recognized() {
        assert_eq!(Command::from_text("start", BOT), None);
        assert_eq!(Command::from_text("/", BOT), None);
        assert_eq!(Command::from_text("/cancel", BOT), None);
        assert_eq!(Command::from_text("", BOT), None);
    }
}
