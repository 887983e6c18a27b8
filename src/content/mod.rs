//! User-facing content
//!
//! Static copy of the agency (greeting, prompts, confirmations, about page)
//! and the renderers for messages delivered to the operator chat.

pub mod render;
pub mod texts;

pub use render::{render_forward, render_consultation, render_question};
