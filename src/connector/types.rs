//! Connector-specific types and error definitions.

use thiserror::Error;

// Re-export ProviderConfig from config module to avoid duplication
pub use crate::config::schema::ProviderConfig;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// Errors that can occur while negotiating with the wallet endpoint.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// The endpoint exposes no unlocked account.
    #[error("no unlocked account exposed by the wallet endpoint")]
    NoAccounts,

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// Connector not initialized or endpoint unreachable.
    #[error("Wallet endpoint not available: {0}")]
    NotAvailable(String),
}

/// Result type for connector operations.
pub type ConnectorResult<T> = Result<T, ConnectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_id_conversion() {
        let chain_id = ChainId::from(1u64);
        assert_eq!(chain_id.0, 1);
        assert_eq!(u64::from(chain_id), 1);
    }

    #[test]
    fn test_error_display() {
        let err = ConnectorError::Timeout(10);
        assert_eq!(err.to_string(), "RPC timeout after 10 seconds");

        let err = ConnectorError::ChainMismatch {
            expected: 1,
            actual: 31337,
        };
        assert!(err.to_string().contains("31337"));
    }
}
