//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! session service and connector produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (session counters)
//!
//! Consumers:
//!     → stdout log stream (env-filterable)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured logging with field-level context (connector, attempt id)
//! - Metrics are cheap (atomic increments) and off by default
//! - RUST_LOG overrides the configured log level

pub mod logging;
pub mod metrics;
