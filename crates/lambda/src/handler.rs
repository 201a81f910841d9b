//! Batch handler: storage-change records in, webhook alerts out.
//!
//! One record is fully fetched, parsed, and delivered before the next
//! begins. The first failing record aborts the rest of the batch and the
//! error propagates as an invocation failure; records are otherwise
//! independent and nothing is shared across them.

use mailbridge_cloud::{ObjectStore, StoreError};
use mailbridge_core::{AlertPayload, ChangeRecord, MailError, StorageEvent};
use mailbridge_delivery::{AlertNotifier, WebhookError};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for a failed record within a batch.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// Object retrieval or decoding failed.
    #[error("Object fetch failed: {0}")]
    Fetch(#[from] StoreError),

    /// The stored object could not be parsed as a mail message.
    #[error("Mail parse failed: {0}")]
    Parse(#[from] MailError),

    /// The outbound webhook call failed.
    #[error("Alert delivery failed: {0}")]
    Delivery(#[from] WebhookError),
}

// ---------------------------------------------------------------------------
// InvocationStatus
// ---------------------------------------------------------------------------

/// Result document returned to the invoking infrastructure.
///
/// Serializes to `{"status": "success"}`. There is no failure variant:
/// unhandled errors propagate as an invocation failure instead.
#[derive(Debug, Clone, Serialize)]
pub struct InvocationStatus {
    status: &'static str,
}

impl InvocationStatus {
    /// The fixed success indicator.
    pub fn success() -> Self {
        Self { status: "success" }
    }
}

// ---------------------------------------------------------------------------
// MailBridge
// ---------------------------------------------------------------------------

/// Processes a batch of change records into webhook alerts.
///
/// Both collaborators are injected so tests can run the full pipeline
/// against an in-memory store and a recording notifier.
pub struct MailBridge<S, N> {
    store: S,
    notifier: N,
    /// Expected source bucket; a record naming a different bucket is still
    /// processed, with a warning.
    expected_bucket: Option<String>,
}

impl<S: ObjectStore, N: AlertNotifier> MailBridge<S, N> {
    /// Create a bridge over the given store and notifier.
    pub fn new(store: S, notifier: N, expected_bucket: Option<String>) -> Self {
        Self {
            store,
            notifier,
            expected_bucket,
        }
    }

    /// Process every record in the batch, strictly in order.
    ///
    /// Stops at the first failure; records after it are not attempted.
    pub async fn handle(&self, event: &StorageEvent) -> Result<InvocationStatus, BridgeError> {
        tracing::info!(records = event.records.len(), "Processing notification batch");

        for record in &event.records {
            self.process_record(record).await?;
        }

        Ok(InvocationStatus::success())
    }

    /// Fetch, parse, compose, and deliver one record.
    async fn process_record(&self, record: &ChangeRecord) -> Result<(), BridgeError> {
        let bucket = record.bucket();
        let key = record.key();

        if let Some(expected) = &self.expected_bucket {
            if expected != bucket {
                tracing::warn!(
                    bucket,
                    expected = %expected,
                    "Record bucket differs from configured bucket"
                );
            }
        }

        let bytes = self.store.get_object(bucket, key).await?;
        let raw = String::from_utf8(bytes).map_err(StoreError::from)?;

        let mail = mailbridge_core::mail::extract(&raw)?;
        let payload = AlertPayload::compose(&mail);

        self.notifier.notify(&payload).await?;

        tracing::info!(bucket, key, subject = ?mail.subject, "Record forwarded to webhook");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
