use std::future::Future;
use std::time::Duration;

use bytes::Bytes;
use uuid::Uuid;

use crate::domain::common::entities::{app_errors::CoreError, pagination::{OffsetLimit, Paginated}};

use super::entities::{PresignedUrl, StoredImage};
use super::value_objects::StoredImageFilter;

/// Port for object storage operations (MinIO/S3)
#[cfg_attr(test, mockall::automock)]
pub trait ObjectStoragePort: Send + Sync {
    fn put_object(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn presign_get_url(
        &self,
        object_key: &str,
        expires_in: Duration,
    ) -> impl Future<Output = Result<PresignedUrl, CoreError>> + Send;

    fn delete_object(&self, object_key: &str)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Repository for stored image metadata
#[cfg_attr(test, mockall::automock)]
pub trait StoredImageRepository: Send + Sync {
    fn create(
        &self,
        image: StoredImage,
    ) -> impl Future<Output = Result<StoredImage, CoreError>> + Send;

    fn list(
        &self,
        filter: StoredImageFilter,
        pagination: OffsetLimit,
    ) -> impl Future<Output = Result<Paginated<StoredImage>, CoreError>> + Send;

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = Result<StoredImage, CoreError>> + Send;

    fn delete(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
