//! Test context for router-level tests
//!
//! Wires a [`Router`] to an in-memory store and a notifier double that
//! records every payload and can simulate an unreachable operator chat.

use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use super::telegram_mock::test_bot_username;
use StudyBuddy::{
    handlers::Router,
    models::ForwardPayload,
    services::{Delivery, Notifier},
    state::{FlowManager, SessionStore},
};

/// Notifier double
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    forwarded: Arc<Mutex<Vec<ForwardPayload>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every forward is recorded and then reported as failed
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn forwarded(&self) -> Vec<ForwardPayload> {
        self.forwarded.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn forward(&self, payload: &ForwardPayload) -> Delivery {
        self.forwarded.lock().unwrap().push(payload.clone());
        if self.fail {
            Delivery::Failed("operator chat unreachable".to_string())
        } else {
            Delivery::Delivered
        }
    }
}

/// Router plus handles to what it touches
pub struct TestContext {
    pub router: Router,
    pub notifier: RecordingNotifier,
    pub store: SessionStore,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_notifier(RecordingNotifier::new())
    }

    pub fn with_notifier(notifier: RecordingNotifier) -> Self {
        let store = SessionStore::new();
        let router = Router::new(store.clone(), FlowManager::new(), Arc::new(notifier.clone()))
            .with_bot_username(test_bot_username());

        Self {
            router,
            notifier,
            store,
        }
    }
}
