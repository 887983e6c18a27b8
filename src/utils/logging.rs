//! Logging configuration and setup
//! 
//! This module provides logging initialization and structured logging utilities
//! for the StudyBuddy application.

use tracing::{info, warn, debug, error};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{ErrorSeverity, StudyBuddyError, Result};

/// Initialize logging based on configuration.
///
/// `RUST_LOG` wins over the configured level when set. The returned guard
/// flushes the file writer on drop and must be held for the process lifetime.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory)?;
            let file_appender = tracing_appender::rolling::daily(directory, &config.file_prefix);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = if config.json {
                tracing_subscriber::fmt::layer().json().with_ansi(false).with_writer(non_blocking).boxed()
            } else {
                tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking).boxed()
            };
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| StudyBuddyError::Logging(e.to_string()))?;
        
    info!(level = %config.level, directory = ?config.directory, "Logging initialized");
    Ok(guard)
}

/// Log a flow transition for a conversation
pub fn log_flow_event(chat_id: i64, event: &str, from: &str, to: &str) {
    info!(
        chat_id = chat_id,
        event = event,
        from = from,
        to = to,
        "Flow transition"
    );
}

/// Log a failed operator delivery; never surfaces to the user
pub fn log_delivery_failure(chat_id: i64, kind: &str, reason: &str) {
    warn!(
        chat_id = chat_id,
        kind = kind,
        reason = reason,
        "Operator delivery failed, continuing"
    );
}

/// Log an inbound message that matched nothing
pub fn log_ignored(chat_id: i64, state: &str) {
    debug!(chat_id = chat_id, state = state, "Message ignored");
}

/// Log a handler error at the level its severity calls for
pub fn log_handler_error(context: &str, err: &StudyBuddyError) {
    match err.severity() {
        ErrorSeverity::Critical | ErrorSeverity::Error => {
            error!(context = context, severity = %err.severity(), error = %err, "Handler failed")
        }
        ErrorSeverity::Warning => {
            warn!(context = context, severity = %err.severity(), error = %err, "Handler failed")
        }
        ErrorSeverity::Info => {
            info!(context = context, severity = %err.severity(), error = %err, "Handler failed")
        }
    }
}
