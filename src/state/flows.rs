//! Flow definitions and the flow manager
//!
//! A flow is a linear list of steps, each collecting one field. The manager
//! is pure: it looks at a session and an answer and describes what should
//! happen next as a [`Transition`]. Applying it is the router's job.

use std::collections::HashMap;
use crate::content::texts;
use crate::models::{ConsultationRequest, ForwardPayload, Keyboard, QuestionRequest, Reply, Sender};
use super::session::{FlowKind, FlowState, Session};

/// One step of a flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowStep {
    /// State the conversation is in while this step waits for input
    pub state: FlowState,
    /// Field the answer is recorded under
    pub field: &'static str,
    /// Text asking for this field, sent on entering the step
    pub prompt: &'static str,
    /// Following step, `None` completes the flow
    pub next: Option<FlowState>,
}

/// A complete flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowDefinition {
    pub kind: FlowKind,
    pub steps: Vec<FlowStep>,
    /// Keyboard attached to the first prompt
    pub entry_keyboard: Keyboard,
    /// Sent to the user once the flow completes
    pub confirmation: &'static str,
}

impl FlowDefinition {
    pub fn first_step(&self) -> Option<&FlowStep> {
        self.steps.first()
    }

    pub fn step(&self, state: FlowState) -> Option<&FlowStep> {
        self.steps.iter().find(|step| step.state == state)
    }
}

/// Outcome of starting or advancing a flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: FlowState,
    /// Answer to record before moving on
    pub record: Option<(String, String)>,
    /// Payload for the operator, present only on completion
    pub forward: Option<ForwardPayload>,
    pub replies: Vec<Reply>,
    /// Session must be cleared back to idle
    pub completed: bool,
}

/// Registry of flows
#[derive(Debug, Clone)]
pub struct FlowManager {
    flows: HashMap<FlowKind, FlowDefinition>,
}

impl FlowManager {
    /// Create a manager with the consultation and question flows registered
    pub fn new() -> Self {
        let mut manager = Self {
            flows: HashMap::new(),
        };

        manager.register_flow(create_consultation_flow());
        manager.register_flow(create_question_flow());
        manager
    }

    pub fn register_flow(&mut self, flow: FlowDefinition) {
        self.flows.insert(flow.kind, flow);
    }

    pub fn get_flow(&self, kind: FlowKind) -> Option<&FlowDefinition> {
        self.flows.get(&kind)
    }

    /// Enter a flow: move to its first step and ask the first question
    pub fn start(&self, kind: FlowKind) -> Option<Transition> {
        let flow = self.get_flow(kind)?;
        let first = flow.first_step()?;

        Some(Transition {
            next: first.state,
            record: None,
            forward: None,
            replies: vec![Reply::text(first.prompt).with_keyboard(flow.entry_keyboard)],
            completed: false,
        })
    }

    /// Accept `text` as the answer for the session's current step.
    ///
    /// Any text is accepted, including an empty one. Returns `None` when the
    /// session is not inside a known flow step.
    pub fn advance(&self, session: &Session, text: &str, sender: &Sender) -> Option<Transition> {
        let flow = self.get_flow(session.state.flow()?)?;
        let step = flow.step(session.state)?;
        let record = Some((step.field.to_string(), text.to_string()));

        match step.next {
            Some(next_state) => {
                let next_step = flow.step(next_state)?;
                Some(Transition {
                    next: next_state,
                    record,
                    forward: None,
                    replies: vec![Reply::text(next_step.prompt)],
                    completed: false,
                })
            }
            None => {
                let mut answers: Vec<(&str, &str)> = session
                    .fields()
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str()))
                    .collect();
                answers.push((step.field, text));

                Some(Transition {
                    next: FlowState::Idle,
                    record,
                    forward: Some(build_payload(flow.kind, &answers, sender)),
                    replies: vec![Reply::text(flow.confirmation).with_keyboard(Keyboard::Menu)],
                    completed: true,
                })
            }
        }
    }
}

impl Default for FlowManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the operator payload from the answers collected in a flow
fn build_payload(kind: FlowKind, answers: &[(&str, &str)], sender: &Sender) -> ForwardPayload {
    let answer = |name: &str| -> String {
        answers
            .iter()
            .rev()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
            .unwrap_or_default()
    };

    match kind {
        FlowKind::Consultation => ForwardPayload::Consultation(ConsultationRequest {
            name: answer("name"),
            country: answer("country"),
            program: answer("program"),
            contact: answer("contact"),
        }),
        FlowKind::Question => ForwardPayload::Question(QuestionRequest {
            sender: sender.clone(),
            text: answer("question"),
        }),
    }
}

/// Consultation intake: name -> country -> program -> contact
fn create_consultation_flow() -> FlowDefinition {
    FlowDefinition {
        kind: FlowKind::Consultation,
        steps: vec![
            FlowStep {
                state: FlowState::ConsultName,
                field: "name",
                prompt: texts::ASK_NAME,
                next: Some(FlowState::ConsultCountry),
            },
            FlowStep {
                state: FlowState::ConsultCountry,
                field: "country",
                prompt: texts::ASK_COUNTRY,
                next: Some(FlowState::ConsultProgram),
            },
            FlowStep {
                state: FlowState::ConsultProgram,
                field: "program",
                prompt: texts::ASK_PROGRAM,
                next: Some(FlowState::ConsultContact),
            },
            FlowStep {
                state: FlowState::ConsultContact,
                field: "contact",
                prompt: texts::ASK_CONTACT,
                next: None,
            },
        ],
        entry_keyboard: Keyboard::Remove,
        confirmation: texts::CONSULTATION_DONE,
    }
}

/// Free-text question: a single waiting step
fn create_question_flow() -> FlowDefinition {
    FlowDefinition {
        kind: FlowKind::Question,
        steps: vec![FlowStep {
            state: FlowState::QuestionWaiting,
            field: "question",
            prompt: texts::ASK_QUESTION,
            next: None,
        }],
        entry_keyboard: Keyboard::Keep,
        confirmation: texts::QUESTION_DONE,
    }
}
