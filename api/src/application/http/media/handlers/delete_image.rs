use axum::extract::{Path, State};
use orderdesk_core::domain::media::services::ImageService;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/images/{image_id}",
    tag = "media",
    summary = "Delete an image",
    params(
        ("image_id" = Uuid, Path, description = "Image ID"),
    ),
    responses(
        (status = 204, description = "Image deleted"),
        (status = 404, description = "Image not found")
    )
)]
pub async fn delete_image(
    Path(image_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_image(image_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete image: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::NoContent)
}
