//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → WidgetConfig (validated, immutable)
//!     → shared with connector and observability at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; read exactly once at startup
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ObservabilityConfig, ProviderConfig, WidgetConfig};
