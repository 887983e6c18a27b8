//! Mock Telegram API Server for testing
//! 
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
    pub delay_ms: Option<u64>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            success: true,
            delay_ms: None,
        }
    }
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Bot pointed at this server
    pub fn bot(&self) -> teloxide::Bot {
        teloxide::Bot::new(test_bot_token())
            .set_api_url(self.server.uri().parse().expect("mock server uri is a valid url"))
    }

    fn send_message_path() -> String {
        format!("/bot{}/SendMessage", test_bot_token())
    }

    fn response(config: &MockResponseConfig) -> ResponseTemplate {
        let body = if config.success {
            json!({
                "ok": true,
                "result": {
                    "message_id": 123,
                    "from": {
                        "id": 12345,
                        "is_bot": true,
                        "first_name": "TestBot",
                        "username": "test_bot"
                    },
                    "chat": {
                        "id": test_user_id(),
                        "type": "private",
                        "first_name": "Alice"
                    },
                    "date": 1640995200,
                    "text": "Test message"
                }
            })
        } else {
            json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found"
            })
        };

        let mut response = ResponseTemplate::new(if config.success { 200 } else { 400 })
            .set_body_json(body);

        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }
        response
    }

    /// Setup mock for sendMessage endpoint, any chat
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        Mock::given(method("POST"))
            .and(path(Self::send_message_path()))
            .respond_with(Self::response(&config))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for sendMessage to one chat; takes priority over the catch-all
    pub async fn mock_send_message_to(&self, chat_id: i64, config: MockResponseConfig) {
        Mock::given(method("POST"))
            .and(path(Self::send_message_path()))
            .and(body_partial_json(json!({ "chat_id": chat_id })))
            .respond_with(Self::response(&config))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Bodies of every sendMessage request, in arrival order
    pub async fn sent_messages(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| req.url.path().ends_with("/SendMessage"))
            .filter_map(|req| req.body_json::<Value>().ok())
            .collect()
    }

    /// sendMessage bodies addressed to one chat
    pub async fn sent_to(&self, chat_id: i64) -> Vec<Value> {
        self.sent_messages()
            .await
            .into_iter()
            .filter(|body| body["chat_id"] == json!(chat_id))
            .collect()
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }
}

/// Helper function to create a test bot token
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Username the bot under test answers to in `/cmd@name` mentions
pub fn test_bot_username() -> &'static str {
    "StudyBuddyBot"
}

/// Helper function to create test operator chat ID
pub fn test_operator_chat_id() -> i64 {
    -1001234567890
}

/// Helper function to create test user ID (also the private chat ID)
pub fn test_user_id() -> i64 {
    987654321
}
