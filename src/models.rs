use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One indexed photo, as stored in the search index and returned to clients.
///
/// `labels` holds only lowercase, trimmed, non-empty strings: the union of
/// vision-detected labels and user-supplied custom labels for the photo.
/// A document is written exactly once per successful ingestion; re-ingesting
/// the same object key writes a new document (overwrite semantics belong to
/// the search backend).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhotoDocument {
    #[serde(rename = "objectKey")]
    pub object_key: String,
    pub bucket: String,
    #[serde(rename = "createdTimestamp")]
    pub created_timestamp: DateTime<Utc>,
    pub labels: Vec<String>,
}

/// Reference to a photo object in storage.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoRef {
    pub bucket: String,
    pub object_key: String,
}

/// Storage-event notification envelope delivered to the ingestion endpoint.
/// Mirrors the bucket-notification JSON shape, so upload events can be
/// forwarded to `POST /api/ingest` unmodified.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestEvent {
    #[serde(rename = "Records")]
    pub records: Vec<IngestRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngestRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Object {
    pub key: String,
}

impl IngestEvent {
    /// Flatten the envelope into the ordered batch of photo references.
    pub fn photo_refs(&self) -> Vec<PhotoRef> {
        self.records
            .iter()
            .map(|r| PhotoRef {
                bucket: r.s3.bucket.name.clone(),
                object_key: r.s3.object.key.clone(),
            })
            .collect()
    }
}

/// Acknowledgment returned after a successful ingestion batch.
#[derive(Debug, Clone, Serialize)]
pub struct IngestResponse {
    pub indexed: usize,
}
