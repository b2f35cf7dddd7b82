use axum::extract::{Path, State};
use orderdesk_core::domain::media::{entities::PresignedUrl, services::ImageService};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/images/{image_id}/download-url",
    tag = "media",
    summary = "Get a download URL for an image",
    params(
        ("image_id" = Uuid, Path, description = "Image ID"),
    ),
    responses(
        (status = 200, body = PresignedUrl),
        (status = 404, description = "Image not found")
    )
)]
pub async fn get_image_url(
    Path(image_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<PresignedUrl>, ApiError> {
    let url = state
        .service
        .get_download_url(image_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(url))
}
