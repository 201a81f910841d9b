//! Webhook delivery of alert payloads.
//!
//! [`WebhookDelivery`] sends a JSON-encoded [`AlertPayload`] to a fixed
//! external URL via HTTP POST. One attempt per alert, no retry; a failed
//! delivery propagates to the handler.

use std::time::Duration;

use async_trait::async_trait;
use mailbridge_core::AlertPayload;

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for webhook delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("Webhook returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// AlertNotifier
// ---------------------------------------------------------------------------

/// Pushes one alert to the outside world.
#[async_trait]
pub trait AlertNotifier: Send + Sync {
    /// Deliver a single alert payload.
    async fn notify(&self, payload: &AlertPayload) -> Result<(), WebhookError>;
}

// ---------------------------------------------------------------------------
// WebhookDelivery
// ---------------------------------------------------------------------------

/// Delivers alert payloads to a chat webhook endpoint.
pub struct WebhookDelivery {
    client: reqwest::Client,
    url: String,
}

impl WebhookDelivery {
    /// Create a delivery service posting to the given webhook URL.
    pub fn new(url: String) -> Result<Self, WebhookError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl AlertNotifier for WebhookDelivery {
    async fn notify(&self, payload: &AlertPayload) -> Result<(), WebhookError> {
        let response = self.client.post(&self.url).json(payload).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            tracing::error!(url = %self.url, status, "Webhook rejected alert");
            return Err(WebhookError::HttpStatus(status));
        }

        tracing::info!(url = %self.url, "Alert delivered to webhook");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
