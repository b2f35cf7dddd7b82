use std::future::Future;
use std::time::Duration;

use sha2::{Digest, Sha256};
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    common::{
        entities::{
            app_errors::CoreError,
            pagination::{OffsetLimit, Paginated},
        },
        generate_random_string,
        services::Service,
    },
    media::{
        entities::{PresignedUrl, StoredImage, StoredImageConfig},
        policies::ensure_acceptable_image,
        ports::{ObjectStoragePort, StoredImageRepository},
        value_objects::{StoredImageFilter, UploadImageInput},
    },
};

const DOWNLOAD_URL_TTL: Duration = Duration::from_secs(15 * 60);

/// Service trait for image storage operations
#[cfg_attr(test, mockall::automock)]
pub trait ImageService: Send + Sync {
    /// Store an uploaded image and record its metadata
    fn upload_image(
        &self,
        input: UploadImageInput,
    ) -> impl Future<Output = Result<StoredImage, CoreError>> + Send;

    /// List stored images with filtering and pagination
    fn list_images(
        &self,
        filter: StoredImageFilter,
        pagination: OffsetLimit,
    ) -> impl Future<Output = Result<Paginated<StoredImage>, CoreError>> + Send;

    /// Get a presigned download URL for an image
    fn get_download_url(
        &self,
        image_id: Uuid,
    ) -> impl Future<Output = Result<PresignedUrl, CoreError>> + Send;

    /// Delete an image and its metadata
    fn delete_image(&self, image_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

impl<S, I> ImageService for Service<S, I>
where
    S: ObjectStoragePort,
    I: StoredImageRepository,
{
    #[instrument(skip(self, input), fields(filename = %input.filename))]
    async fn upload_image(&self, input: UploadImageInput) -> Result<StoredImage, CoreError> {
        ensure_acceptable_image(&input.mime_type, input.payload.len())?;

        let mut hasher = Sha256::new();
        hasher.update(&input.payload);
        let checksum = hex::encode(hasher.finalize());

        let object_key = format!(
            "images/{}-{}",
            generate_random_string(12),
            object_key_part(&input.filename)
        );
        let size_bytes = input.payload.len() as i64;

        self.object_storage
            .put_object(&object_key, input.payload.clone(), &input.mime_type)
            .await?;

        let image = StoredImage::new(StoredImageConfig {
            filename: input.filename,
            object_key,
            mime_type: input.mime_type,
            size_bytes,
            checksum_sha256: checksum,
        });

        self.image_repository.create(image).await
    }

    async fn list_images(
        &self,
        filter: StoredImageFilter,
        pagination: OffsetLimit,
    ) -> Result<Paginated<StoredImage>, CoreError> {
        self.image_repository.list(filter, pagination).await
    }

    #[instrument(skip(self))]
    async fn get_download_url(&self, image_id: Uuid) -> Result<PresignedUrl, CoreError> {
        let image = self.image_repository.get_by_id(image_id).await?;
        self.object_storage
            .presign_get_url(&image.object_key, DOWNLOAD_URL_TTL)
            .await
    }

    #[instrument(skip(self))]
    async fn delete_image(&self, image_id: Uuid) -> Result<(), CoreError> {
        let image = self.image_repository.get_by_id(image_id).await?;
        self.object_storage.delete_object(&image.object_key).await?;
        self.image_repository.delete(image.id).await
    }
}

/// Object keys keep only characters safe across S3 implementations.
fn object_key_part(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::ports::{MockObjectStoragePort, MockStoredImageRepository};
    use bytes::Bytes;

    fn upload_input(mime_type: &str, payload: &[u8]) -> UploadImageInput {
        UploadImageInput {
            filename: "product shot.png".to_string(),
            mime_type: mime_type.to_string(),
            payload: Bytes::copy_from_slice(payload),
        }
    }

    #[tokio::test]
    async fn upload_rejects_disallowed_mime_type_before_touching_storage() {
        let storage = MockObjectStoragePort::new();
        let repository = MockStoredImageRepository::new();
        let service = Service::new(storage, repository);

        let result = service
            .upload_image(upload_input("application/zip", b"zip"))
            .await;

        assert!(matches!(result, Err(CoreError::InvalidParameter(_))));
    }

    #[tokio::test]
    async fn upload_stores_object_then_records_metadata() {
        let mut storage = MockObjectStoragePort::new();
        storage
            .expect_put_object()
            .withf(|key, _, mime| key.starts_with("images/") && mime == "image/png")
            .once()
            .returning(|_, _, _| Box::pin(async { Ok(()) }));

        let mut repository = MockStoredImageRepository::new();
        repository
            .expect_create()
            .withf(|image| {
                image.size_bytes == 4
                    && image.filename == "product shot.png"
                    && !image.checksum_sha256.is_empty()
                    && !image.object_key.contains(' ')
            })
            .once()
            .returning(|image| Box::pin(async move { Ok(image) }));

        let service = Service::new(storage, repository);
        let stored = service
            .upload_image(upload_input("image/png", b"\x89PNG"))
            .await
            .unwrap();

        assert_eq!(stored.mime_type, "image/png");
    }

    #[tokio::test]
    async fn download_url_propagates_missing_image() {
        let storage = MockObjectStoragePort::new();
        let mut repository = MockStoredImageRepository::new();
        repository
            .expect_get_by_id()
            .returning(|id| Box::pin(async move { Err(CoreError::NotFound(format!("image {id} not found"))) }));

        let service = Service::new(storage, repository);
        let result = service.get_download_url(Uuid::new_v4()).await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }
}
