//! Outbound chat alert payload.
//!
//! The downstream chat workflow expects a single-key JSON object whose
//! `alert_message` variable it splices into the channel message. The field
//! value is a fixed label, the subject (bolded), and the body, separated by
//! newlines. Serialization is deterministic: no timestamps, no random fields.

use serde::Serialize;

use crate::mail::ParsedMail;

/// Fixed first line of every outbound alert.
pub const ALERT_LABEL: &str = "📊 QuickSight Alert";

/// The JSON body posted to the chat webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertPayload {
    /// Formatted message consumed by the chat workflow.
    pub alert_message: String,
}

impl AlertPayload {
    /// Compose the alert text from an extracted message.
    ///
    /// An absent subject renders as an empty bold slot rather than a
    /// placeholder word, so the alert never shows stray literal text.
    pub fn compose(mail: &ParsedMail) -> Self {
        let subject = mail.subject.as_deref().unwrap_or("");
        Self {
            alert_message: format!("{ALERT_LABEL}\n*{subject}*\n{}", mail.body),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
