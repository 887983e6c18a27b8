//! In-memory session storage
//!
//! One async mutex per conversation identifier. The outer map lock is only
//! held to find or insert a cell, so conversations never wait on each other.
//! Nothing is persisted; a restart forgets every session.

use std::collections::HashMap;
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use tracing::debug;
use crate::models::ConversationId;
use super::session::{FlowState, Session};

/// Session storage keyed by conversation identifier
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<ConversationId, Arc<Mutex<Session>>>>>,
}

/// Storage statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageStats {
    pub total_sessions: usize,
    pub idle_sessions: usize,
    pub active_flows: usize,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session cell for `id`, created idle on first touch
    async fn cell(&self, id: ConversationId) -> Arc<Mutex<Session>> {
        if let Some(cell) = self.sessions.read().await.get(&id) {
            return Arc::clone(cell);
        }

        let mut sessions = self.sessions.write().await;
        Arc::clone(sessions.entry(id).or_insert_with(|| {
            debug!(chat_id = id, "Creating session");
            Arc::new(Mutex::new(Session::new()))
        }))
    }

    /// Exclusive access to one conversation's session for a read-modify-write
    pub async fn lock(&self, id: ConversationId) -> OwnedMutexGuard<Session> {
        self.cell(id).await.lock_owned().await
    }

    /// Snapshot of the session, creating an idle one if absent
    pub async fn get(&self, id: ConversationId) -> Session {
        self.lock(id).await.clone()
    }

    pub async fn set_state(&self, id: ConversationId, state: FlowState) {
        self.lock(id).await.set_state(state);
    }

    pub async fn record_field(&self, id: ConversationId, name: &str, value: &str) {
        self.lock(id).await.record_field(name, value);
    }

    /// Reset to idle and drop collected fields
    pub async fn clear(&self, id: ConversationId) {
        self.lock(id).await.clear();
    }

    pub async fn contains(&self, id: ConversationId) -> bool {
        self.sessions.read().await.contains_key(&id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn stats(&self) -> StorageStats {
        let cells: Vec<Arc<Mutex<Session>>> = self.sessions.read().await.values().cloned().collect();

        let mut stats = StorageStats {
            total_sessions: cells.len(),
            ..StorageStats::default()
        };
        for cell in cells {
            if cell.lock().await.is_idle() {
                stats.idle_sessions += 1;
            } else {
                stats.active_flows += 1;
            }
        }
        stats
    }
}
