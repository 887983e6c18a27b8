//! Per-conversation session
//!
//! A session is the current flow state plus the answers collected so far in
//! that flow. Fields keep insertion order so summaries read in form order.

use std::fmt;
use std::str::FromStr;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::utils::errors::StudyBuddyError;

/// The two flow variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowKind {
    Consultation,
    Question,
}

impl FlowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowKind::Consultation => "consult",
            FlowKind::Question => "question",
        }
    }
}

/// Where a conversation currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlowState {
    #[default]
    Idle,
    ConsultName,
    ConsultCountry,
    ConsultProgram,
    ConsultContact,
    QuestionWaiting,
}

impl FlowState {
    pub const ALL: [FlowState; 6] = [
        FlowState::Idle,
        FlowState::ConsultName,
        FlowState::ConsultCountry,
        FlowState::ConsultProgram,
        FlowState::ConsultContact,
        FlowState::QuestionWaiting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlowState::Idle => "idle",
            FlowState::ConsultName => "consult:name",
            FlowState::ConsultCountry => "consult:country",
            FlowState::ConsultProgram => "consult:program",
            FlowState::ConsultContact => "consult:contact",
            FlowState::QuestionWaiting => "question:waiting",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, FlowState::Idle)
    }

    /// Flow this state belongs to, `None` when idle
    pub fn flow(&self) -> Option<FlowKind> {
        match self {
            FlowState::Idle => None,
            FlowState::ConsultName
            | FlowState::ConsultCountry
            | FlowState::ConsultProgram
            | FlowState::ConsultContact => Some(FlowKind::Consultation),
            FlowState::QuestionWaiting => Some(FlowKind::Question),
        }
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowState {
    type Err = StudyBuddyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlowState::ALL
            .iter()
            .copied()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| StudyBuddyError::InvalidInput(format!("Unknown flow state: {}", s)))
    }
}

/// User conversation session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub state: FlowState,
    fields: Vec<(String, String)>,
    /// When this session was last touched
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Fresh idle session with no collected fields
    pub fn new() -> Self {
        Self {
            state: FlowState::Idle,
            fields: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    pub fn set_state(&mut self, state: FlowState) {
        self.state = state;
        self.updated_at = Utc::now();
    }

    /// Record an answer. A repeated name overwrites in place.
    pub fn record_field(&mut self, name: &str, value: &str) {
        match self.fields.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.fields.push((name.to_string(), value.to_string())),
        }
        self.updated_at = Utc::now();
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Collected fields in insertion order
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Back to idle with nothing collected
    pub fn clear(&mut self) {
        self.state = FlowState::Idle;
        self.fields.clear();
        self.updated_at = Utc::now();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
