//! Message handlers module
//! 
//! Bridges teloxide messages to the [`Router`] and turns the returned
//! [`Reply`] values into `sendMessage` calls.

use teloxide::{Bot, types::{ChatId, KeyboardRemove, Message, ParseMode, ReplyMarkup}, prelude::*};
use teloxide::sugar::request::RequestLinkPreviewExt;
use tracing::{debug, error};
use crate::utils::errors::Result;
use crate::models::{Inbound, Keyboard, Reply, Sender};
use crate::middleware::LogMiddleware;
use crate::handlers::{commands::Command, menu::menu_keyboard, router::Router};

/// Handle incoming messages that are not recognized commands.
///
/// The update itself is logged by the dispatcher's inspect stage.
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    router: &Router,
    log: &LogMiddleware,
) -> Result<()> {
    let Some(inbound) = inbound_from_message(&msg) else {
        debug!(chat_id = ?msg.chat.id, "Message without sender, skipping");
        return Ok(());
    };

    let tracker = log.create_performance_span("handle_message");
    let replies = router.on_message(msg.chat.id.0, &inbound).await;
    let result = send_replies(&bot, msg.chat.id, replies).await;

    if let Some(tracker) = tracker {
        tracker.complete(result.is_ok());
    }
    result
}

/// Handle bot commands parsed by the dispatcher
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    router: &Router,
    log: &LogMiddleware,
) -> Result<()> {
    if let Some(user) = msg.from.as_ref() {
        log.log_command(user, cmd);
    }

    let replies = router.on_command(msg.chat.id.0, cmd).await;
    send_replies(&bot, msg.chat.id, replies).await
}

/// Reduce a Telegram message to text and sender.
///
/// Non-text messages use their caption, or an empty string when there is none.
/// Returns `None` for messages without a user (channel posts).
pub fn inbound_from_message(msg: &Message) -> Option<Inbound> {
    let user = msg.from.as_ref()?;
    let text = msg.text().or_else(|| msg.caption()).unwrap_or_default();

    Some(Inbound::new(text, Sender::new(user.id.0 as i64, user.full_name())))
}

/// Send replies in order, stopping at the first failure
pub async fn send_replies(bot: &Bot, chat_id: ChatId, replies: Vec<Reply>) -> Result<()> {
    for reply in replies {
        let mut request = bot.send_message(chat_id, reply.text);

        if reply.rich {
            request = request.parse_mode(ParseMode::Html);
        }

        if reply.disable_link_preview {
            request = request.disable_link_preview(true);
        }

        if let Some(markup) = reply_markup(reply.keyboard) {
            request = request.reply_markup(markup);
        }

        if let Err(e) = request.await {
            error!(chat_id = ?chat_id, error = %e, "Failed to send reply");
            return Err(e.into());
        }
    }

    Ok(())
}

/// Telegram markup for a keyboard attachment
pub fn reply_markup(keyboard: Keyboard) -> Option<ReplyMarkup> {
    match keyboard {
        Keyboard::Keep => None,
        Keyboard::Menu => Some(ReplyMarkup::Keyboard(menu_keyboard())),
        Keyboard::Remove => Some(ReplyMarkup::KeyboardRemove(KeyboardRemove::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_reply_markup_mapping() {
        assert!(reply_markup(Keyboard::Keep).is_none());
        assert_matches!(reply_markup(Keyboard::Menu), Some(ReplyMarkup::Keyboard(k)) if k.keyboard.len() == 3);
        assert_matches!(reply_markup(Keyboard::Remove), Some(ReplyMarkup::KeyboardRemove(_)));
    }
}
