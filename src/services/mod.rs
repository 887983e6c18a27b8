//! Services module
//!
//! This module contains the services the conversation logic talks to.

pub mod notification;

// Re-export commonly used services
pub use notification::{Delivery, Notifier, NotificationStats, TelegramNotifier};
