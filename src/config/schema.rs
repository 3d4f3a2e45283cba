//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the widget.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the wallet widget.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WidgetConfig {
    /// Injected wallet provider settings (RPC endpoint, chain).
    pub provider: ProviderConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Injected wallet provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Primary JSON-RPC endpoint of the injected wallet
    /// (e.g., "http://127.0.0.1:8545").
    pub rpc_url: String,

    /// Additional endpoints tried in order when the primary fails.
    pub failover_urls: Vec<String>,

    /// Expected chain ID; connection attempts verify against it.
    pub chain_id: u64,

    /// Per-call RPC timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".to_string(),
            failover_urls: Vec::new(),
            chain_id: 1,
            rpc_timeout_secs: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level filter when RUST_LOG is not set (e.g., "info").
    pub log_level: String,

    /// Whether to expose Prometheus metrics.
    pub metrics_enabled: bool,

    /// Address for the metrics endpoint (e.g., "127.0.0.1:9090").
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WidgetConfig::default();
        assert_eq!(config.provider.rpc_url, "http://127.0.0.1:8545");
        assert!(config.provider.failover_urls.is_empty());
        assert_eq!(config.provider.rpc_timeout_secs, 10);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_minimal_toml() {
        let config: WidgetConfig = toml::from_str(
            r#"
            [provider]
            rpc_url = "http://127.0.0.1:7545"
            chain_id = 31337
            "#,
        )
        .unwrap();
        assert_eq!(config.provider.rpc_url, "http://127.0.0.1:7545");
        assert_eq!(config.provider.chain_id, 31337);
        // Unspecified fields fall back to defaults
        assert_eq!(config.provider.rpc_timeout_secs, 10);
        assert_eq!(config.observability.log_level, "info");
    }
}
