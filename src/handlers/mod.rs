//! Bot handlers module
//! 
//! This module contains the message routing and all bot handlers:
//! - Command handlers for global bot commands
//! - Menu handlers for the reply-keyboard labels
//! - The router that picks a handler for every inbound message
//! - Message handlers bridging teloxide updates to the router

pub mod commands;
pub mod menu;
pub mod messages;
pub mod router;

// Re-export commonly used handler items
pub use commands::Command;
pub use menu::MenuOption;
pub use router::{Route, Router};
