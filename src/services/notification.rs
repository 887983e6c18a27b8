//! Operator notification service
//! 
//! Forwards completed consultation forms and user questions to the single
//! operator chat. Each forward is exactly one `sendMessage` attempt; there are
//! no retries and the caller only ever sees a [`Delivery`] value.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use teloxide::{Bot, types::{ChatId, ParseMode}, requests::Requester, prelude::Request, payloads::SendMessageSetters};
use tracing::{info, debug};
use crate::config::settings::BotConfig;
use crate::content::render_forward;
use crate::models::ForwardPayload;

/// Outcome of a single forward attempt
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    /// The operator chat could not be reached; carries the reason for logs
    Failed(String),
}

impl Delivery {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Delivery::Delivered)
    }
}

/// Destination for operator-bound payloads
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn forward(&self, payload: &ForwardPayload) -> Delivery;
}

/// Notification statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationStats {
    pub total_sent: u64,
    pub total_failed: u64,
}

/// Notifier that posts to the operator chat through the Bot API
#[derive(Clone)]
pub struct TelegramNotifier {
    bot: Bot,
    operator_chat_id: ChatId,
    sent: Arc<AtomicU64>,
    failed: Arc<AtomicU64>,
}

impl TelegramNotifier {
    /// Create a new TelegramNotifier instance
    pub fn new(bot: Bot, operator_chat_id: ChatId) -> Self {
        Self {
            bot,
            operator_chat_id,
            sent: Arc::new(AtomicU64::new(0)),
            failed: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Create from bot settings
    pub fn from_config(bot: Bot, config: &BotConfig) -> Self {
        Self::new(bot, ChatId(config.operator_chat_id))
    }

    pub fn operator_chat_id(&self) -> ChatId {
        self.operator_chat_id
    }

    pub fn get_stats(&self) -> NotificationStats {
        NotificationStats {
            total_sent: self.sent.load(Ordering::Relaxed),
            total_failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn forward(&self, payload: &ForwardPayload) -> Delivery {
        debug!(chat_id = ?self.operator_chat_id, kind = payload.kind(), "Forwarding to operator");

        let text = render_forward(payload);
        let request = self.bot
            .send_message(self.operator_chat_id, text)
            .parse_mode(ParseMode::Html);

        match request.send().await {
            Ok(_) => {
                self.sent.fetch_add(1, Ordering::Relaxed);
                info!(chat_id = ?self.operator_chat_id, kind = payload.kind(), "Operator notified");
                Delivery::Delivered
            }
            Err(e) => {
                self.failed.fetch_add(1, Ordering::Relaxed);
                Delivery::Failed(e.to_string())
            }
        }
    }
}
