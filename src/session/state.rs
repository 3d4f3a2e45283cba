//! Wallet session state.

use alloy::primitives::Address;
use serde::Serialize;

/// Observed state of the wallet session.
///
/// The address exists exactly when a session does; there is no way to
/// represent a connected session without one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SessionState {
    /// No active session.
    #[default]
    Disconnected,
    /// Active session with the connected account.
    Connected {
        /// The connected account address.
        address: Address,
    },
}

impl SessionState {
    /// Whether an active session exists.
    pub fn is_connected(&self) -> bool {
        matches!(self, SessionState::Connected { .. })
    }

    /// The connected account address, if any.
    pub fn address(&self) -> Option<&Address> {
        match self {
            SessionState::Connected { address } => Some(address),
            SessionState::Disconnected => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_address() -> Address {
        "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
            .parse()
            .unwrap()
    }

    #[test]
    fn test_disconnected_state() {
        let state = SessionState::Disconnected;
        assert!(!state.is_connected());
        assert_eq!(state.address(), None);
    }

    #[test]
    fn test_connected_state() {
        let address = test_address();
        let state = SessionState::Connected { address };
        assert!(state.is_connected());
        assert_eq!(state.address(), Some(&address));
    }

    #[test]
    fn test_default_is_disconnected() {
        assert_eq!(SessionState::default(), SessionState::Disconnected);
    }

    #[test]
    fn test_serializes_with_status_tag() {
        let json = serde_json::to_value(SessionState::Disconnected).unwrap();
        assert_eq!(json["status"], "disconnected");

        let json = serde_json::to_value(SessionState::Connected {
            address: test_address(),
        })
        .unwrap();
        assert_eq!(json["status"], "connected");
        assert!(json["address"].as_str().unwrap().starts_with("0x"));
    }
}
