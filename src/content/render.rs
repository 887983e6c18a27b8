//! Operator message rendering
//!
//! User input is escaped before it is placed into HTML so that whatever the
//! user typed cannot make the operator delivery fail on entity parsing.

use teloxide::utils::html;
use crate::models::{ConsultationRequest, ForwardPayload, QuestionRequest};
use super::texts;

/// Render any forward payload to the HTML sent to the operator
pub fn render_forward(payload: &ForwardPayload) -> String {
    match payload {
        ForwardPayload::Consultation(request) => render_consultation(request),
        ForwardPayload::Question(request) => render_question(request),
    }
}

/// Consultation summary: header plus one labelled line per field, in form order
pub fn render_consultation(request: &ConsultationRequest) -> String {
    format!(
        "{}\n\n{}: {}\n{}: {}\n{}: {}\n{}: {}\n",
        texts::OPERATOR_CONSULTATION_HEADER,
        texts::LABEL_NAME,
        html::escape(&request.name),
        texts::LABEL_COUNTRY,
        html::escape(&request.country),
        texts::LABEL_PROGRAM,
        html::escape(&request.program),
        texts::LABEL_CONTACT,
        html::escape(&request.contact),
    )
}

/// Question: header with a mention link to the sender, then the question body
pub fn render_question(request: &QuestionRequest) -> String {
    format!(
        "{} <a href=\"tg://user?id={}\">{}</a>:\n\n{}",
        texts::OPERATOR_QUESTION_HEADER,
        request.sender.id,
        html::escape(&request.sender.full_name),
        html::escape(&request.text),
    )
}
