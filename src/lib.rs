//! Wallet Session Widget Library

pub mod config;
pub mod connector;
pub mod observability;
pub mod session;
pub mod widget;

pub use config::schema::WidgetConfig;
pub use connector::{Connector, InjectedConnector};
pub use session::{SessionHandle, SessionService, SessionState};
pub use widget::WalletWidget;
