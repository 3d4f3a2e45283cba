//! Wallet connection transports.
//!
//! # Data Flow
//! ```text
//! ProviderConfig (RPC URLs, chain id, timeout)
//!     → injected.rs (endpoint negotiation, account discovery)
//!     → session service (connect/disconnect requests)
//! ```
//!
//! # Security Constraints
//! - No key material passes through this crate; the endpoint signs
//! - Never log account lists beyond the selected address
//! - All RPC calls have configurable timeouts

pub mod injected;
pub mod types;

use alloy::primitives::Address;
use async_trait::async_trait;

pub use injected::InjectedConnector;
pub use types::{ChainId, ConnectorError, ConnectorResult};

/// A wallet connection transport.
///
/// Implementations own the negotiation with an external wallet; the session
/// service calls these operations and never inspects transport details.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Short transport identifier used in logs.
    fn name(&self) -> &'static str;

    /// Request a new session; returns the connected account address.
    async fn connect(&self) -> ConnectorResult<Address>;

    /// Request termination of the current session.
    async fn disconnect(&self) -> ConnectorResult<()>;
}
