//! TelegramNotifier against a mocked Bot API

mod helpers;

use helpers::*;
use serde_json::json;
use teloxide::types::ChatId;
use StudyBuddy::models::{ConsultationRequest, ForwardPayload, QuestionRequest};
use StudyBuddy::services::{Delivery, Notifier, NotificationStats, TelegramNotifier};

fn consultation() -> ForwardPayload {
    ForwardPayload::Consultation(ConsultationRequest {
        name: "Alice".to_string(),
        country: "France".to_string(),
        program: "Masters".to_string(),
        contact: "alice@x.com".to_string(),
    })
}

#[tokio::test]
async fn test_forward_posts_summary_to_operator() {
    let mock = TelegramMockServer::new().await;
    mock.mock_send_message(MockResponseConfig::default()).await;
    let notifier = TelegramNotifier::new(mock.bot(), ChatId(test_operator_chat_id()));

    let delivery = notifier.forward(&consultation()).await;

    assert_eq!(delivery, Delivery::Delivered);
    let sent = mock.sent_to(test_operator_chat_id()).await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["parse_mode"], json!("HTML"));
    let text = sent[0]["text"].as_str().unwrap();
    for value in ["Alice", "France", "Masters", "alice@x.com"] {
        assert!(text.contains(value), "summary should contain {}", value);
    }
    assert_eq!(notifier.get_stats(), NotificationStats { total_sent: 1, total_failed: 0 });
}

#[tokio::test]
async fn test_forward_question_mentions_sender() {
    let mock = TelegramMockServer::new().await;
    mock.mock_send_message(MockResponseConfig::default()).await;
    let notifier = TelegramNotifier::new(mock.bot(), ChatId(test_operator_chat_id()));

    let payload = ForwardPayload::Question(QuestionRequest {
        sender: test_sender(),
        text: "Сколько стоит обучение?".to_string(),
    });
    let delivery = notifier.forward(&payload).await;

    assert!(delivery.is_delivered());
    let sent = mock.sent_to(test_operator_chat_id()).await;
    let text = sent[0]["text"].as_str().unwrap();
    assert!(text.contains(&format!("tg://user?id={}", test_user_id())));
    assert!(text.contains("Alice Liddell"));
    assert!(text.contains("Сколько стоит обучение?"));
}

#[tokio::test]
async fn test_forward_failure_is_reported_not_raised() {
    let mock = TelegramMockServer::new().await;
    mock.mock_send_message(MockResponseConfig { success: false, delay_ms: None }).await;
    let notifier = TelegramNotifier::new(mock.bot(), ChatId(test_operator_chat_id()));

    let delivery = notifier.forward(&consultation()).await;

    assert!(matches!(delivery, Delivery::Failed(ref reason) if reason.contains("chat not found")));
    assert_eq!(notifier.get_stats(), NotificationStats { total_sent: 0, total_failed: 1 });
}

#[tokio::test]
async fn test_forward_is_attempted_exactly_once() {
    let mock = TelegramMockServer::new().await;
    mock.mock_send_message(MockResponseConfig { success: false, delay_ms: None }).await;
    let notifier = TelegramNotifier::new(mock.bot(), ChatId(test_operator_chat_id()));

    let _ = notifier.forward(&consultation()).await;

    assert_eq!(mock.sent_messages().await.len(), 1);
}
