//! Test data helpers
//!
//! Builders for inbound messages, both as router input and as Telegram
//! `Message` values decoded from Bot API JSON.

use serde_json::json;
use teloxide::types::Message;
use StudyBuddy::models::{Inbound, Sender};
use super::telegram_mock::test_user_id;

pub fn test_sender() -> Sender {
    Sender::new(test_user_id(), "Alice Liddell")
}

pub fn inbound(text: &str) -> Inbound {
    Inbound::new(text, test_sender())
}

/// Private-chat text message as the Bot API would deliver it
pub fn create_text_message(chat_id: i64, text: &str) -> Message {
    serde_json::from_value(json!({
        "message_id": 1,
        "date": 1640995200,
        "chat": {
            "id": chat_id,
            "type": "private",
            "first_name": "Alice",
            "last_name": "Liddell"
        },
        "from": {
            "id": test_user_id(),
            "is_bot": false,
            "first_name": "Alice",
            "last_name": "Liddell",
            "language_code": "ru"
        },
        "text": text
    }))
    .expect("valid Bot API message")
}

/// Private-chat photo message, optionally captioned
pub fn create_photo_message(chat_id: i64, caption: Option<&str>) -> Message {
    let mut value = json!({
        "message_id": 2,
        "date": 1640995200,
        "chat": {
            "id": chat_id,
            "type": "private",
            "first_name": "Alice"
        },
        "from": {
            "id": test_user_id(),
            "is_bot": false,
            "first_name": "Alice"
        },
        "photo": [{
            "file_id": "AgACAgIAAxkBAAIB",
            "file_unique_id": "AQADmLkxG",
            "width": 90,
            "height": 90,
            "file_size": 1024
        }]
    });
    if let Some(caption) = caption {
        value["caption"] = json!(caption);
    }

    serde_json::from_value(value).expect("valid Bot API message")
}
