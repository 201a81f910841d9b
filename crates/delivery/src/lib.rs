//! Outbound delivery channel for mailbridge alerts.
//!
//! One channel exists: a chat webhook accepting a JSON payload. The
//! [`AlertNotifier`] trait abstracts it so the handler can be exercised
//! against a recording fake in tests.

pub mod webhook;

pub use webhook::{AlertNotifier, WebhookDelivery, WebhookError};
