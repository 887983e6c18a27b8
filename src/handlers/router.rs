//! Message router
//!
//! Picks one handler for every inbound message, in this order:
//! 1. a global command, whatever the state;
//! 2. a menu label, only while idle;
//! 3. the step handler of the current flow state;
//! 4. otherwise nothing happens and nothing is sent.

use std::sync::Arc;
use tracing::{debug, info};
use crate::models::{ConversationId, Inbound, Reply};
use crate::services::{Delivery, Notifier};
use crate::state::{FlowKind, FlowManager, FlowState, Session, SessionStore, Transition};
use crate::utils::helpers::format_relative_time;
use crate::utils::logging;
use super::commands::{self, Command};
use super::menu::{self, MenuOption};

/// Where an inbound message goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Command(Command),
    Menu(MenuOption),
    Step(FlowState),
    Ignored,
}

impl Route {
    /// Resolve a message against the conversation's current state.
    ///
    /// `bot_username` decides whether `/cmd@name` is addressed to us.
    pub fn resolve(state: FlowState, text: &str, bot_username: Option<&str>) -> Self {
        if let Some(cmd) = Command::from_text(text, bot_username) {
            return Route::Command(cmd);
        }

        if state.is_idle() {
            return match MenuOption::from_label(text) {
                Some(option) => Route::Menu(option),
                None => Route::Ignored,
            };
        }

        Route::Step(state)
    }
}

/// Routes messages through the flow manager and applies the results
#[derive(Clone)]
pub struct Router {
    store: SessionStore,
    flows: Arc<FlowManager>,
    notifier: Arc<dyn Notifier>,
    bot_username: Option<String>,
}

impl Router {
    pub fn new(store: SessionStore, flows: FlowManager, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            flows: Arc::new(flows),
            notifier,
            bot_username: None,
        }
    }

    /// Username used to tell our `/cmd@name` mentions from other bots'
    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = Some(username.into());
        self
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Handle one inbound message and return the replies to send back
    pub async fn on_message(&self, chat_id: ConversationId, inbound: &Inbound) -> Vec<Reply> {
        let mut session = self.store.lock(chat_id).await;
        let route = Route::resolve(session.state, &inbound.text, self.bot_username.as_deref());

        debug!(
            chat_id = chat_id,
            user_id = inbound.sender.id,
            state = %session.state,
            route = ?route,
            "Routing message"
        );

        match route {
            Route::Command(cmd) => commands::handle_command(cmd),
            Route::Menu(MenuOption::Consultation) => {
                self.start_flow(&mut session, chat_id, FlowKind::Consultation).await
            }
            Route::Menu(MenuOption::Question) => {
                self.start_flow(&mut session, chat_id, FlowKind::Question).await
            }
            Route::Menu(MenuOption::About) => menu::handle_about(),
            Route::Step(state) => {
                match self.flows.advance(&session, &inbound.text, &inbound.sender) {
                    Some(transition) => self.apply(&mut session, chat_id, transition).await,
                    None => {
                        logging::log_ignored(chat_id, state.as_str());
                        Vec::new()
                    }
                }
            }
            Route::Ignored => {
                logging::log_ignored(chat_id, session.state.as_str());
                Vec::new()
            }
        }
    }

    /// Handle a command recognized by the transport
    pub async fn on_command(&self, chat_id: ConversationId, cmd: Command) -> Vec<Reply> {
        let session = self.store.lock(chat_id).await;
        if !session.is_idle() {
            debug!(
                chat_id = chat_id,
                state = %session.state,
                since = %format_relative_time(session.updated_at),
                "Command received mid-flow, state kept"
            );
        }
        commands::handle_command(cmd)
    }

    async fn start_flow(&self, session: &mut Session, chat_id: ConversationId, kind: FlowKind) -> Vec<Reply> {
        match self.flows.start(kind) {
            Some(transition) => {
                session.clear();
                self.apply(session, chat_id, transition).await
            }
            None => {
                debug!(chat_id = chat_id, flow = kind.as_str(), "Flow not registered");
                Vec::new()
            }
        }
    }

    /// Record, forward, move state, then hand back the replies.
    ///
    /// A failed forward is logged and dropped; the replies are returned either way.
    async fn apply(&self, session: &mut Session, chat_id: ConversationId, transition: Transition) -> Vec<Reply> {
        let from = session.state;

        if let Some((field, value)) = &transition.record {
            session.record_field(field, value);
        }

        if let Some(payload) = &transition.forward {
            match self.notifier.forward(payload).await {
                Delivery::Delivered => {}
                Delivery::Failed(reason) => logging::log_delivery_failure(chat_id, payload.kind(), &reason),
            }
        }

        if transition.completed {
            session.clear();
            info!(chat_id = chat_id, from = %from, "Flow completed");
        } else {
            session.set_state(transition.next);
        }

        logging::log_flow_event(chat_id, "transition", from.as_str(), session.state.as_str());
        transition.replies
    }
}
