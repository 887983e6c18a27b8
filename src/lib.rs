//! StudyBuddy Telegram Bot
//!
//! Conversational front desk for a study-abroad agency. Greets users, offers a
//! three-item menu, walks them through a short consultation intake form and
//! forwards finished forms and free-text questions to the operator chat.

#![allow(non_snake_case)]

pub mod config;
pub mod content;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{StudyBuddyError, Result};

// Re-export main components for easy access
pub use handlers::Router;
pub use services::{Notifier, TelegramNotifier, Delivery};
pub use state::{FlowManager, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
