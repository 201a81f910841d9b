//! Typed storage-change notification records.
//!
//! The invoking infrastructure delivers S3 event notifications as a batch of
//! records. These types mirror the wire shape exactly and are validated at
//! the boundary by serde: a record missing its bucket name or object key
//! fails deserialization instead of surfacing as a lookup error mid-loop.

use serde::Deserialize;

/// A batch of storage-change notifications, as delivered by the event source.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageEvent {
    #[serde(rename = "Records")]
    pub records: Vec<ChangeRecord>,
}

/// One entry in the triggering batch: a single stored object that changed.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeRecord {
    pub s3: S3Entity,
}

impl ChangeRecord {
    /// Name of the container (bucket) holding the changed object.
    pub fn bucket(&self) -> &str {
        &self.s3.bucket.name
    }

    /// Key of the changed object within its container.
    pub fn key(&self) -> &str {
        &self.s3.object.key
    }
}

/// The `s3` sub-document of a change record.
#[derive(Debug, Clone, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3ObjectRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3ObjectRef {
    pub key: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_EVENT: &str = r#"{
        "Records": [
            {
                "eventName": "ObjectCreated:Put",
                "s3": {
                    "bucket": { "name": "inbound-mail", "arn": "arn:aws:s3:::inbound-mail" },
                    "object": { "key": "ses/abc123", "size": 2048 }
                }
            }
        ]
    }"#;

    #[test]
    fn deserializes_s3_notification_shape() {
        let event: StorageEvent = serde_json::from_str(SAMPLE_EVENT).unwrap();
        assert_eq!(event.records.len(), 1);
        assert_eq!(event.records[0].bucket(), "inbound-mail");
        assert_eq!(event.records[0].key(), "ses/abc123");
    }

    #[test]
    fn missing_object_key_fails_fast() {
        let malformed = r#"{
            "Records": [
                { "s3": { "bucket": { "name": "inbound-mail" }, "object": {} } }
            ]
        }"#;
        let result: Result<StorageEvent, _> = serde_json::from_str(malformed);
        assert!(result.is_err());
    }

    #[test]
    fn missing_records_array_fails_fast() {
        let result: Result<StorageEvent, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn empty_batch_is_valid() {
        let event: StorageEvent = serde_json::from_str(r#"{"Records": []}"#).unwrap();
        assert!(event.records.is_empty());
    }
}
