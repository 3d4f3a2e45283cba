//! Wallet session subsystem.
//!
//! # Data Flow
//! ```text
//! widget activation
//!     → SessionHandle (fire-and-forget SessionCommand)
//!     → SessionService task (invokes connector, owns state)
//!     → watch channel (publish SessionState)
//!     → observers re-render
//! ```
//!
//! # State Machine
//! ```text
//! Disconnected → Connected { address }: connect request granted by connector
//! Connected { address } → Disconnected: disconnect request
//! ```
//! Failed connects and inapplicable requests leave the state unchanged.

pub mod service;
pub mod state;

pub use service::{SessionCommand, SessionHandle, SessionService};
pub use state::SessionState;
