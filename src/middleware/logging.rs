//! Logging middleware
//! 
//! Structured logging of inbound messages and commands, plus timing of
//! message handling.

use std::time::Instant;
use teloxide::types::{ChatKind, MediaKind, Message, MessageKind, PublicChatKind, Update, UpdateKind, User};
use tracing::{info, debug, warn, Span};
use crate::handlers::commands::Command;
use crate::utils::helpers::truncate_text;

/// Longest text excerpt written to logs
const LOG_TEXT_CHARS: usize = 64;

/// Logging middleware for bot interactions
#[derive(Debug, Clone)]
pub struct LogMiddleware {
    log_user_interactions: bool,
    log_performance: bool,
}

impl LogMiddleware {
    /// Create a new LogMiddleware instance
    pub fn new(log_user_interactions: bool, log_performance: bool) -> Self {
        Self {
            log_user_interactions,
            log_performance,
        }
    }

    /// Log any update entering the handler tree
    pub fn log_update(&self, update: &Update) {
        match &update.kind {
            UpdateKind::Message(message) => self.log_message(message),
            _ => debug!(update_id = update.id.0, "Non-message update received"),
        }
    }

    /// Log message details
    pub fn log_message(&self, message: &Message) {
        if !self.log_user_interactions {
            return;
        }

        let chat_type = match message.chat.kind {
            ChatKind::Public(ref public) => match public.kind {
                PublicChatKind::Group => "group",
                PublicChatKind::Supergroup(_) => "supergroup",
                PublicChatKind::Channel(_) => "channel",
            },
            ChatKind::Private(_) => "private",
        };

        let message_type = match &message.kind {
            MessageKind::Common(common) => match &common.media_kind {
                MediaKind::Text(_) => "text",
                MediaKind::Photo(_) => "photo",
                MediaKind::Video(_) => "video",
                MediaKind::Document(_) => "document",
                MediaKind::Audio(_) => "audio",
                MediaKind::Voice(_) => "voice",
                MediaKind::Sticker(_) => "sticker",
                _ => "other_media",
            },
            _ => "other",
        };

        info!(
            user_id = message.from.as_ref().map(|user| user.id.0),
            chat_id = message.chat.id.0,
            chat_type = chat_type,
            message_type = message_type,
            message_id = message.id.0,
            "Message received"
        );

        // Form answers carry names and contacts
        if let Some(text) = message.text() {
            debug!(
                chat_id = message.chat.id.0,
                message_id = message.id.0,
                text = %truncate_text(text, LOG_TEXT_CHARS),
                "Message text"
            );
        }
    }

    /// Log command execution
    pub fn log_command(&self, user: &User, command: Command) {
        if !self.log_user_interactions {
            return;
        }

        info!(
            user_id = user.id.0,
            username = user.username.as_deref().unwrap_or("none"),
            command = ?command,
            "Command executed"
        );
    }

    /// Create a performance tracking span
    pub fn create_performance_span(&self, operation: &str) -> Option<PerformanceTracker> {
        if self.log_performance {
            Some(PerformanceTracker::new(operation.to_string()))
        } else {
            None
        }
    }
}

impl Default for LogMiddleware {
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// Performance tracker for measuring operation duration
pub struct PerformanceTracker {
    operation: String,
    start_time: Instant,
    _span: Span,
}

impl PerformanceTracker {
    fn new(operation: String) -> Self {
        let span = tracing::debug_span!("performance", operation = %operation);
        
        Self {
            operation,
            start_time: Instant::now(),
            _span: span,
        }
    }

    /// Complete the performance tracking and log the result
    pub fn complete(self, success: bool) {
        let duration_ms = self.start_time.elapsed().as_millis();
        
        if success {
            debug!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation completed successfully"
            );
        } else {
            warn!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation failed"
            );
        }

        // Telegram round trips above a second are worth noticing
        if duration_ms > 1000 {
            warn!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Slow operation detected"
            );
        }
    }
}
