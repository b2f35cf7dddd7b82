use bson::DateTime as BsonDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, media::entities::StoredImage};

/// Persistence model for the `stored_images` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredImageDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub filename: String,
    pub object_key: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub checksum_sha256: String,
    pub created_at: BsonDateTime,
    pub updated_at: BsonDateTime,
}

impl From<&StoredImage> for StoredImageDocument {
    fn from(image: &StoredImage) -> Self {
        Self {
            id: image.id.to_string(),
            filename: image.filename.clone(),
            object_key: image.object_key.clone(),
            mime_type: image.mime_type.clone(),
            size_bytes: image.size_bytes,
            checksum_sha256: image.checksum_sha256.clone(),
            created_at: BsonDateTime::from_chrono(image.created_at),
            updated_at: BsonDateTime::from_chrono(image.updated_at),
        }
    }
}

pub fn map_stored_image(document: StoredImageDocument) -> Result<StoredImage, CoreError> {
    let id = Uuid::parse_str(&document.id).map_err(|e| {
        tracing::error!("Corrupt UUID '{}' in stored_images collection: {}", document.id, e);
        CoreError::InternalServerError
    })?;

    Ok(StoredImage {
        id,
        filename: document.filename,
        object_key: document.object_key,
        mime_type: document.mime_type,
        size_bytes: document.size_bytes,
        checksum_sha256: document.checksum_sha256,
        created_at: document.created_at.to_chrono(),
        updated_at: document.updated_at.to_chrono(),
    })
}
