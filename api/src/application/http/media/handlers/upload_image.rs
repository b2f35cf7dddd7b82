use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use orderdesk_core::domain::media::{
    entities::StoredImage,
    policies::MAX_IMAGE_SIZE_BYTES,
    services::ImageService,
    value_objects::UploadImageInput,
};
use tracing::{error, warn};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "/images",
    tag = "media",
    summary = "Upload an image",
    description = "Upload a product or customer image via multipart form data. The image \
        is stored in MinIO and its metadata recorded in the database.",
    responses(
        (status = 200, description = "Image uploaded successfully", body = StoredImage),
        (status = 400, description = "Bad request"),
        (status = 413, description = "Image too large")
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<AxumResponse, ApiError> {
    let mut filename: Option<String> = None;
    let mut mime_type: Option<String> = None;
    let mut payload: Option<bytes::Bytes> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                if let Some(file_name) = field.file_name() {
                    filename = Some(file_name.to_string());
                } else {
                    return Err(ApiError::BadRequest(
                        "Missing filename in file field".to_string(),
                    ));
                }

                if let Some(content_type) = field.content_type() {
                    mime_type = Some(content_type.to_string());
                }

                let data = field.bytes().await.map_err(|e| {
                    error!("Failed to read file bytes: {}", e);
                    ApiError::BadRequest(format!("Failed to read file: {}", e))
                })?;

                if data.is_empty() {
                    warn!(
                        filename = %filename.as_deref().unwrap_or("unknown"),
                        "Empty image upload attempted"
                    );
                    return Err(ApiError::BadRequest("Image cannot be empty".to_string()));
                }

                if data.len() > MAX_IMAGE_SIZE_BYTES {
                    return Ok((
                        StatusCode::PAYLOAD_TOO_LARGE,
                        format!("Image too large. Max size is {} bytes", MAX_IMAGE_SIZE_BYTES),
                    )
                        .into_response());
                }

                payload = Some(data);
            }
            _ => {
                // Ignore unknown fields
            }
        }
    }

    let filename = filename.ok_or_else(|| {
        ApiError::BadRequest("Missing 'file' field in multipart form".to_string())
    })?;
    let payload = payload
        .ok_or_else(|| ApiError::BadRequest("Missing file data in 'file' field".to_string()))?;
    let mime_type = mime_type.unwrap_or_else(|| "application/octet-stream".to_string());

    let stored = state
        .service
        .upload_image(UploadImageInput {
            filename: filename.clone(),
            mime_type: mime_type.clone(),
            payload,
        })
        .await
        .map_err(|e| {
            error!(
                error = %e,
                filename = %filename,
                mime_type = %mime_type,
                "Failed to upload image"
            );
            ApiError::from(e)
        })?;

    Ok(Response::OK(stored).into_response())
}
