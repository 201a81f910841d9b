//! S3 object fetch behind an injectable trait.
//!
//! The handler never talks to `aws-sdk-s3` directly. It goes through
//! [`ObjectStore`] so tests can substitute an in-memory fake, and so the
//! client is an explicitly constructed, injected dependency rather than a
//! process-global handle.

use async_trait::async_trait;
use aws_sdk_s3::Client;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for object fetch failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The GetObject call itself failed (missing key, permission denial,
    /// network error).
    #[error("GetObject failed for {bucket}/{key}: {message}")]
    GetObject {
        bucket: String,
        key: String,
        message: String,
    },

    /// The response body stream could not be collected.
    #[error("Failed to read object body: {0}")]
    ByteStream(String),

    /// The object's bytes are not valid UTF-8 text.
    #[error("Object is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

// ---------------------------------------------------------------------------
// ObjectStore
// ---------------------------------------------------------------------------

/// Read access to stored objects.
///
/// Each change record names its own bucket, so the bucket is a call
/// parameter rather than client state.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the raw bytes of one object.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError>;
}

/// AWS S3 implementation of [`ObjectStore`].
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    /// Wrap a pre-configured S3 client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StoreError::GetObject {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: e.to_string(),
            })?;

        let data = response
            .body
            .collect()
            .await
            .map_err(|e| StoreError::ByteStream(e.to_string()))?;

        let bytes = data.to_vec();
        tracing::debug!(bucket, key, size = bytes.len(), "Fetched object");
        Ok(bytes)
    }
}

/// Build an S3 client from the SDK default credential chain.
///
/// `endpoint` switches to a custom endpoint (MinIO-style local stack) and
/// enables path-style addressing, which those stacks require.
pub async fn create_client(endpoint: Option<&str>) -> Client {
    let mut config_builder = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Some(endpoint_url) = endpoint {
        config_builder = config_builder.endpoint_url(endpoint_url);
    }

    let config = config_builder.load().await;

    let s3_config_builder = aws_sdk_s3::config::Builder::from(&config);
    let s3_config = if endpoint.is_some() {
        s3_config_builder.force_path_style(true).build()
    } else {
        s3_config_builder.build()
    };

    Client::from_conf(s3_config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display_get_object() {
        let err = StoreError::GetObject {
            bucket: "inbound-mail".to_string(),
            key: "ses/abc123".to_string(),
            message: "access denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "GetObject failed for inbound-mail/ses/abc123: access denied"
        );
    }

    #[test]
    fn store_error_display_invalid_utf8() {
        let err = StoreError::from(String::from_utf8(vec![0xff, 0xfe]).unwrap_err());
        assert!(err.to_string().starts_with("Object is not valid UTF-8"));
    }
}
