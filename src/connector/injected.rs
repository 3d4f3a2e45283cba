//! Injected wallet connector over JSON-RPC.
//!
//! # Responsibilities
//! - Reach a browser-injected / locally unlocked wallet endpoint
//! - Discover the account the endpoint exposes (`eth_accounts`)
//! - Verify the endpoint serves the configured chain
//! - Handle timeouts and network errors gracefully

use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};
use async_trait::async_trait;
use tokio::time::timeout;

use crate::connector::types::{ChainId, ConnectorError, ConnectorResult, ProviderConfig};
use crate::connector::Connector;

/// Connector negotiating with an injected wallet endpoint, with failover.
#[derive(Clone)]
pub struct InjectedConnector {
    /// List of providers (primary + failovers).
    providers: Vec<Arc<dyn Provider + Send + Sync>>,
    /// Configuration.
    config: ProviderConfig,
    /// Request timeout duration.
    timeout_duration: Duration,
}

impl InjectedConnector {
    /// Create a new injected connector.
    ///
    /// # Arguments
    /// * `config` - Provider configuration (endpoint URLs, chain id, timeout)
    ///
    /// # Returns
    /// A new connector, or an error if no endpoint URL is usable.
    pub fn new(config: ProviderConfig) -> ConnectorResult<Self> {
        let timeout_duration = Duration::from_secs(config.rpc_timeout_secs);
        let mut providers = Vec::new();

        let primary_url: url::Url = config.rpc_url.parse().map_err(|e| {
            ConnectorError::Rpc(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;
        providers.push(Arc::new(ProviderBuilder::new().connect_http(primary_url))
            as Arc<dyn Provider + Send + Sync>);

        for url_str in &config.failover_urls {
            if let Ok(url) = url_str.parse() {
                providers.push(Arc::new(ProviderBuilder::new().connect_http(url))
                    as Arc<dyn Provider + Send + Sync>);
            } else {
                tracing::warn!(url = %url_str, "Ignoring invalid failover RPC URL");
            }
        }

        tracing::info!(
            rpc_url = %config.rpc_url,
            chain_id = config.chain_id,
            "Injected connector initialized"
        );

        Ok(Self {
            providers,
            config,
            timeout_duration,
        })
    }

    /// Verify the connected chain ID matches configuration.
    pub async fn verify_chain_id(&self) -> ConnectorResult<()> {
        let chain_id = self.get_chain_id().await?;
        if chain_id.0 != self.config.chain_id {
            return Err(ConnectorError::ChainMismatch {
                expected: self.config.chain_id,
                actual: chain_id.0,
            });
        }
        Ok(())
    }

    /// Get the chain ID from the endpoint.
    pub async fn get_chain_id(&self) -> ConnectorResult<ChainId> {
        for (i, provider) in self.providers.iter().enumerate() {
            let fut = provider.get_chain_id();
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(result)) => return Ok(ChainId(result)),
                Ok(Err(e)) => {
                    tracing::warn!(provider_idx = i, error = %e, "RPC error, trying next provider");
                }
                Err(_) => {
                    tracing::warn!(provider_idx = i, "RPC timeout, trying next provider");
                }
            }
        }
        Err(ConnectorError::Rpc("All RPC providers failed".to_string()))
    }

    /// Get the accounts the endpoint exposes.
    async fn get_accounts(&self) -> ConnectorResult<Vec<Address>> {
        for (i, provider) in self.providers.iter().enumerate() {
            let fut = provider.get_accounts();
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(result)) => return Ok(result),
                Ok(Err(e)) => tracing::warn!(provider_idx = i, error = %e, "RPC error"),
                Err(_) => tracing::warn!(provider_idx = i, "RPC timeout"),
            }
        }
        Err(ConnectorError::Rpc(
            "All providers failed to list accounts".to_string(),
        ))
    }
}

#[async_trait]
impl Connector for InjectedConnector {
    fn name(&self) -> &'static str {
        "injected"
    }

    async fn connect(&self) -> ConnectorResult<Address> {
        // Chain mismatch is fatal for connect: a session on the wrong chain
        // would report addresses the rest of the stack misinterprets.
        self.verify_chain_id().await?;

        let accounts = self.get_accounts().await?;
        let address = accounts.first().copied().ok_or(ConnectorError::NoAccounts)?;

        tracing::info!(
            address = %address,
            accounts = accounts.len(),
            "Wallet endpoint granted a session"
        );
        Ok(address)
    }

    async fn disconnect(&self) -> ConnectorResult<()> {
        // The injected endpoint keeps no per-client session; dropping the
        // observed account locally is the whole operation.
        tracing::debug!("Releasing injected wallet session");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ProviderConfig {
        ProviderConfig {
            rpc_url: "http://127.0.0.1:8545".to_string(),
            failover_urls: vec![],
            chain_id: 31337,
            rpc_timeout_secs: 1,
        }
    }

    #[test]
    fn test_new_with_valid_url() {
        let connector = InjectedConnector::new(test_config()).unwrap();
        assert_eq!(connector.name(), "injected");
        assert_eq!(connector.providers.len(), 1);
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let mut config = test_config();
        config.rpc_url = "not a url".to_string();
        let result = InjectedConnector::new(config);
        assert!(matches!(result, Err(ConnectorError::Rpc(_))));
    }

    #[test]
    fn test_invalid_failover_skipped() {
        let mut config = test_config();
        config.failover_urls = vec!["::bad::".to_string(), "http://127.0.0.1:8546".to_string()];
        let connector = InjectedConnector::new(config).unwrap();
        // Primary plus the one parseable failover
        assert_eq!(connector.providers.len(), 2);
    }

    #[tokio::test]
    async fn test_connect_fails_without_endpoint() {
        // Nothing listens on this port; every provider attempt errors out.
        let mut config = test_config();
        config.rpc_url = "http://127.0.0.1:59999".to_string();
        let connector = InjectedConnector::new(config).unwrap();
        let result = connector.connect().await;
        assert!(matches!(result, Err(ConnectorError::Rpc(_))));
    }
}
