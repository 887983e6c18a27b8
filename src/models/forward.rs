//! Payloads delivered to the operator chat

use serde::{Deserialize, Serialize};
use super::conversation::Sender;

/// A completed consultation intake form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    pub name: String,
    pub country: String,
    pub program: String,
    pub contact: String,
}

/// A free-text question together with who asked it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub sender: Sender,
    pub text: String,
}

/// Anything the notifier can forward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ForwardPayload {
    Consultation(ConsultationRequest),
    Question(QuestionRequest),
}

impl ForwardPayload {
    /// Short tag used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ForwardPayload::Consultation(_) => "consultation",
            ForwardPayload::Question(_) => "question",
        }
    }
}
