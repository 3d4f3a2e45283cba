//! Session service task and its handle.
//!
//! # Responsibilities
//! - Own the session state; nothing else mutates it
//! - Apply requested transitions by invoking the bound connector
//! - Publish every state change to registered observers
//!
//! # Design Decisions
//! - Transition requests are fire-and-forget: callers never await outcomes
//! - Exactly one connector invocation per applicable request
//! - Requests that do not apply to the current state are ignored, so a
//!   double activation cannot double-invoke the connector
//! - Connect failures leave the state untouched; no local retry

use std::sync::Arc;

use alloy::primitives::Address;
use tokio::sync::{mpsc, watch};
use uuid::Uuid;

use crate::connector::Connector;
use crate::observability::metrics::{
    SESSION_CONNECTS_TOTAL, SESSION_CONNECT_FAILURES_TOTAL, SESSION_DISCONNECTS_TOTAL,
};
use crate::session::state::SessionState;

/// A requested session transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Request session creation via the bound connector.
    Connect,
    /// Request termination of the current session.
    Disconnect,
}

/// Handle for observing the session and requesting transitions.
///
/// Cheap to clone; all clones share one underlying service task. The task
/// stops once every handle has been dropped.
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::UnboundedSender<SessionCommand>,
    state_rx: watch::Receiver<SessionState>,
}

impl SessionHandle {
    /// Current observed session state.
    pub fn state(&self) -> SessionState {
        self.state_rx.borrow().clone()
    }

    /// Register an observer: the receiver resolves `changed()` whenever the
    /// service publishes a new state. No polling.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_rx.clone()
    }

    /// Request session creation. Does not wait for the outcome.
    pub fn request_connect(&self) {
        self.send(SessionCommand::Connect);
    }

    /// Request session termination. Does not wait for the outcome.
    pub fn request_disconnect(&self) {
        self.send(SessionCommand::Disconnect);
    }

    fn send(&self, command: SessionCommand) {
        if self.command_tx.send(command).is_err() {
            tracing::warn!(?command, "Session service is gone; request dropped");
        }
    }
}

/// The task that owns the wallet session.
pub struct SessionService {
    connector: Arc<dyn Connector>,
    commands: mpsc::UnboundedReceiver<SessionCommand>,
    state_tx: watch::Sender<SessionState>,
}

impl SessionService {
    /// Spawn the service over a connector and return a handle to it.
    ///
    /// The initial published state is `Disconnected`; the endpoint holds no
    /// session on behalf of this process until one is requested.
    pub fn spawn(connector: Arc<dyn Connector>) -> SessionHandle {
        let (command_tx, commands) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(SessionState::Disconnected);

        let service = Self {
            connector,
            commands,
            state_tx,
        };
        tokio::spawn(service.run());

        SessionHandle {
            command_tx,
            state_rx,
        }
    }

    async fn run(mut self) {
        tracing::debug!(connector = self.connector.name(), "Session service started");
        while let Some(command) = self.commands.recv().await {
            self.handle(command).await;
        }
        tracing::debug!("Session service stopped");
    }

    async fn handle(&mut self, command: SessionCommand) {
        let current = self.state_tx.borrow().clone();
        match (command, current) {
            (SessionCommand::Connect, SessionState::Disconnected) => self.connect().await,
            (SessionCommand::Disconnect, SessionState::Connected { address }) => {
                self.disconnect(address).await
            }
            (command, state) => {
                tracing::debug!(
                    ?command,
                    connected = state.is_connected(),
                    "Ignoring request that does not apply to the current state"
                );
            }
        }
    }

    async fn connect(&mut self) {
        let attempt_id = Uuid::new_v4();
        metrics::counter!(SESSION_CONNECTS_TOTAL).increment(1);

        match self.connector.connect().await {
            Ok(address) => {
                tracing::info!(
                    %attempt_id,
                    connector = self.connector.name(),
                    %address,
                    "Session connected"
                );
                let _ = self.state_tx.send(SessionState::Connected { address });
            }
            Err(e) => {
                metrics::counter!(SESSION_CONNECT_FAILURES_TOTAL).increment(1);
                tracing::warn!(
                    %attempt_id,
                    connector = self.connector.name(),
                    error = %e,
                    "Connection request failed; staying disconnected"
                );
            }
        }
    }

    async fn disconnect(&mut self, address: Address) {
        metrics::counter!(SESSION_DISCONNECTS_TOTAL).increment(1);

        // The session is dropped even when the connector errors: the user
        // asked to forget it, and the endpoint owns nothing further here.
        if let Err(e) = self.connector.disconnect().await {
            tracing::warn!(error = %e, "Connector disconnect failed; dropping session anyway");
        }

        tracing::info!(%address, "Session disconnected");
        let _ = self.state_tx.send(SessionState::Disconnected);
    }
}
