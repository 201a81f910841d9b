//! Bridge configuration loaded from environment variables.

/// Error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Required environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// Configuration for one bridge process.
///
/// | Variable          | Required | Purpose                                    |
/// |-------------------|----------|--------------------------------------------|
/// | `WEBHOOK_URL`     | yes      | Chat webhook the alerts are posted to      |
/// | `MAIL_BUCKET`     | no       | Expected source bucket (mismatch warning)  |
/// | `S3_ENDPOINT_URL` | no       | Custom S3 endpoint for local development   |
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Chat webhook URL receiving the alert payloads.
    pub webhook_url: String,
    /// Bucket the mail objects are expected to arrive in. The handler
    /// trusts the bucket named in each record either way; this only drives
    /// a mismatch warning.
    pub mail_bucket: Option<String>,
    /// Custom S3 endpoint (MinIO-style local stack). `None` in production.
    pub s3_endpoint_url: Option<String>,
}

impl BridgeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let webhook_url =
            std::env::var("WEBHOOK_URL").map_err(|_| ConfigError::MissingVar("WEBHOOK_URL"))?;

        Ok(Self {
            webhook_url,
            mail_bucket: std::env::var("MAIL_BUCKET").ok(),
            s3_endpoint_url: std::env::var("S3_ENDPOINT_URL").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn from_env_requires_webhook_url() {
        std::env::remove_var("WEBHOOK_URL");
        let err = BridgeConfig::from_env().unwrap_err();
        assert_matches!(err, ConfigError::MissingVar("WEBHOOK_URL"));
        assert_eq!(
            err.to_string(),
            "Required environment variable WEBHOOK_URL is not set"
        );
    }
}
