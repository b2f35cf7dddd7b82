use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Metadata record for a product/customer image held in object storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoredImage {
    pub id: Uuid,
    pub filename: String,
    pub object_key: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub checksum_sha256: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct StoredImageConfig {
    pub filename: String,
    pub object_key: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub checksum_sha256: String,
}

impl StoredImage {
    pub fn new(config: StoredImageConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            filename: config.filename,
            object_key: config.object_key,
            mime_type: config.mime_type,
            size_bytes: config.size_bytes,
            checksum_sha256: config.checksum_sha256,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PresignedUrl {
    pub url: String,
    pub expires_in_seconds: u64,
}
