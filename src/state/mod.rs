//! State management module
//! 
//! This module handles conversation sessions, flow definitions and the
//! in-memory session store.

pub mod flows;
pub mod session;
pub mod storage;

// Re-export commonly used state components
pub use flows::{FlowDefinition, FlowManager, FlowStep, Transition};
pub use session::{FlowKind, FlowState, Session};
pub use storage::{SessionStore, StorageStats};
