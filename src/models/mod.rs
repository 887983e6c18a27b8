//! Data models module
//!
//! Transport-independent values that flow between the router, the flow
//! manager, the notifier and the Telegram glue.

pub mod conversation;
pub mod forward;
pub mod reply;

pub use conversation::{ConversationId, Sender, Inbound};
pub use forward::{ConsultationRequest, QuestionRequest, ForwardPayload};
pub use reply::{Reply, Keyboard};
