//! Lambda entrypoint wiring for the mailbridge notification pipeline.

pub mod config;
pub mod handler;

pub use config::{BridgeConfig, ConfigError};
pub use handler::{BridgeError, InvocationStatus, MailBridge};
