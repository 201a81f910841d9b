//! Domain types for the mailbridge notification pipeline.
//!
//! This crate holds everything that is independent of AWS and HTTP:
//!
//! - [`event`] — the typed storage-change notification batch.
//! - [`mail`] — subject/body extraction from a raw RFC 5322 message.
//! - [`alert`] — composition of the outbound chat payload.

pub mod alert;
pub mod event;
pub mod mail;

pub use alert::AlertPayload;
pub use event::{ChangeRecord, StorageEvent};
pub use mail::{MailError, ParsedMail};
