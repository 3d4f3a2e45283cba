//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, chain id nonzero)
//! - Check endpoint and metrics addresses parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: WidgetConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::WidgetConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "provider.rpc_url").
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &WidgetConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.provider.rpc_url.parse::<url::Url>() {
        errors.push(ValidationError {
            field: "provider.rpc_url".into(),
            message: format!("invalid URL: {}", e),
        });
    }

    for (i, failover) in config.provider.failover_urls.iter().enumerate() {
        if let Err(e) = failover.parse::<url::Url>() {
            errors.push(ValidationError {
                field: format!("provider.failover_urls[{}]", i),
                message: format!("invalid URL: {}", e),
            });
        }
    }

    if config.provider.chain_id == 0 {
        errors.push(ValidationError {
            field: "provider.chain_id".into(),
            message: "chain id must be nonzero".into(),
        });
    }

    if config.provider.rpc_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "provider.rpc_timeout_secs".into(),
            message: "timeout must be greater than zero".into(),
        });
    }

    if config.observability.metrics_enabled {
        if let Err(e) = config.observability.metrics_address.parse::<SocketAddr>() {
            errors.push(ValidationError {
                field: "observability.metrics_address".into(),
                message: format!("invalid socket address: {}", e),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&WidgetConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = WidgetConfig::default();
        config.provider.rpc_url = "not a url".into();
        config.provider.chain_id = 0;
        config.provider.rpc_timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].field, "provider.rpc_url");
        assert_eq!(errors[1].field, "provider.chain_id");
        assert_eq!(errors[2].field, "provider.rpc_timeout_secs");
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = WidgetConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "observability.metrics_address");
    }

    #[test]
    fn test_bad_failover_url() {
        let mut config = WidgetConfig::default();
        config.provider.failover_urls = vec!["http://ok:8545".into(), "::bad::".into()];
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "provider.failover_urls[1]");
    }
}
