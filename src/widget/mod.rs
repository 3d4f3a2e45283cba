//! Wallet connect/disconnect widget.
//!
//! # Responsibilities
//! - Render the observed session state into exactly one interactive control
//! - Dispatch control activation as a session transition request
//!
//! # Design Decisions
//! - Rendering is pure over `SessionState`; no transport knowledge leaks in
//! - Activation is fire-and-forget; the widget re-renders only when the
//!   session service publishes a change (observer registration, no polling)

use serde::Serialize;
use tokio::sync::watch;

use crate::session::{SessionHandle, SessionState};

/// The transition a control requests when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Connect,
    Disconnect,
}

/// The single interactive control the widget renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Control {
    /// Exact label to display.
    pub label: String,
    /// Transition requested on activation.
    pub action: Action,
}

/// Connect/disconnect toggle bound to a wallet session.
#[derive(Clone)]
pub struct WalletWidget {
    session: SessionHandle,
}

impl WalletWidget {
    /// Bind a widget to a session handle.
    pub fn new(session: SessionHandle) -> Self {
        Self { session }
    }

    /// Render the current session state.
    ///
    /// Disconnected sessions render a "Connect Wallet" control; connected
    /// sessions render "Disconnect {address}" for the connected account.
    pub fn render(&self) -> Control {
        match self.session.state() {
            SessionState::Disconnected => Control {
                label: "Connect Wallet".to_string(),
                action: Action::Connect,
            },
            SessionState::Connected { address } => Control {
                label: format!("Disconnect {}", address),
                action: Action::Disconnect,
            },
        }
    }

    /// Activate the rendered control: request the transition it names.
    ///
    /// Sends exactly one request per call and returns immediately.
    pub fn activate(&self) {
        match self.render().action {
            Action::Connect => self.session.request_connect(),
            Action::Disconnect => self.session.request_disconnect(),
        }
    }

    /// Register for session-change notifications to drive re-renders.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.session.subscribe()
    }
}
