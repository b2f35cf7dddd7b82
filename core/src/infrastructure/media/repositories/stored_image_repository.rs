use bson::{Document, doc};
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::{
            app_errors::CoreError,
            pagination::{OffsetLimit, Paginated},
        },
        media::{
            entities::StoredImage, ports::StoredImageRepository, value_objects::StoredImageFilter,
        },
    },
    infrastructure::media::mappers::{StoredImageDocument, map_stored_image},
};

const COLLECTION: &str = "stored_images";

#[derive(Debug, Clone)]
pub struct MongoStoredImageRepository {
    collection: Collection<StoredImageDocument>,
}

impl MongoStoredImageRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }
}

impl StoredImageRepository for MongoStoredImageRepository {
    async fn create(&self, image: StoredImage) -> Result<StoredImage, CoreError> {
        self.collection
            .insert_one(StoredImageDocument::from(&image))
            .await
            .map_err(|e| {
                error!("Failed to record stored image: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(image)
    }

    async fn list(
        &self,
        filter: StoredImageFilter,
        pagination: OffsetLimit,
    ) -> Result<Paginated<StoredImage>, CoreError> {
        let mut query = Document::new();
        if let Some(mime_type) = filter.mime_type {
            query.insert("mime_type", mime_type);
        }

        let total = self
            .collection
            .count_documents(query.clone())
            .await
            .map_err(|e| {
                error!("Failed to count stored images: {}", e);
                CoreError::InternalServerError
            })?;

        let documents: Vec<StoredImageDocument> = self
            .collection
            .find(query)
            .sort(doc! { "created_at": -1 })
            .skip(pagination.offset)
            .limit(pagination.limit as i64)
            .await
            .map_err(|e| {
                error!("Failed to query stored images: {}", e);
                CoreError::InternalServerError
            })?
            .try_collect()
            .await
            .map_err(|e| {
                error!("Failed to read stored image cursor: {}", e);
                CoreError::InternalServerError
            })?;

        let items = documents
            .into_iter()
            .map(map_stored_image)
            .collect::<Result<Vec<_>, CoreError>>()?;

        Ok(Paginated { items, total })
    }

    async fn get_by_id(&self, id: Uuid) -> Result<StoredImage, CoreError> {
        self.collection
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| {
                error!("Failed to get stored image: {}", e);
                CoreError::InternalServerError
            })?
            .ok_or_else(|| CoreError::NotFound(format!("image {id} not found")))
            .and_then(map_stored_image)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| {
                error!("Failed to delete stored image: {}", e);
                CoreError::InternalServerError
            })?;

        if result.deleted_count == 0 {
            return Err(CoreError::NotFound(format!("image {id} not found")));
        }

        Ok(())
    }
}
