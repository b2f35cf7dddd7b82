use mongodb::Database;

use crate::{
    domain::common::{OrderdeskConfig, services::Service},
    infrastructure::{media::MongoStoredImageRepository, object_storage::MinioObjectStorage},
};

pub type OrderdeskService = Service<MinioObjectStorage, MongoStoredImageRepository>;

/// Assemble the domain service over the concrete adapters.
pub async fn create_service(
    config: OrderdeskConfig,
    db: Database,
) -> Result<OrderdeskService, anyhow::Error> {
    let object_storage = MinioObjectStorage::new(config.object_storage.clone()).await;
    let image_repository = MongoStoredImageRepository::new(db);

    Ok(Service::new(object_storage, image_repository))
}
