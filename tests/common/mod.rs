//! Shared mock connectors for integration testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use alloy::primitives::Address;
use async_trait::async_trait;
use wallet_widget::connector::{Connector, ConnectorError, ConnectorResult};

/// Well-known test account (Anvil's first account).
pub const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

pub fn test_address() -> Address {
    TEST_ADDRESS.parse().unwrap()
}

type ConnectFn = dyn Fn(u32) -> ConnectorResult<Address> + Send + Sync;

/// A connector standing in for the injected transport, counting every call.
pub struct MockConnector {
    connects: AtomicU32,
    disconnects: AtomicU32,
    on_connect: Box<ConnectFn>,
}

impl MockConnector {
    /// A connector that grants every session to `address`.
    pub fn granting(address: Address) -> Arc<Self> {
        Self::programmable(move |_| Ok(address))
    }

    /// A connector that refuses every session.
    pub fn refusing() -> Arc<Self> {
        Self::programmable(|_| Err(ConnectorError::NoAccounts))
    }

    /// A connector whose outcome depends on the connect attempt number.
    pub fn programmable<F>(f: F) -> Arc<Self>
    where
        F: Fn(u32) -> ConnectorResult<Address> + Send + Sync + 'static,
    {
        Arc::new(Self {
            connects: AtomicU32::new(0),
            disconnects: AtomicU32::new(0),
            on_connect: Box::new(f),
        })
    }

    pub fn connect_calls(&self) -> u32 {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn disconnect_calls(&self) -> u32 {
        self.disconnects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Connector for MockConnector {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn connect(&self) -> ConnectorResult<Address> {
        let attempt = self.connects.fetch_add(1, Ordering::SeqCst);
        (self.on_connect)(attempt)
    }

    async fn disconnect(&self) -> ConnectorResult<()> {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
