use axum::extract::{Query, State};
use orderdesk_core::domain::{
    common::entities::pagination::OffsetLimit,
    media::{entities::StoredImage, services::ImageService, value_objects::StoredImageFilter},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    media::validators::ListImagesQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListImagesResponse {
    pub items: Vec<StoredImage>,
    pub offset: u64,
    pub limit: u64,
    pub total: u64,
}

#[utoipa::path(
    get,
    path = "/images",
    tag = "media",
    summary = "List images",
    params(ListImagesQuery),
    responses(
        (status = 200, body = ListImagesResponse)
    )
)]
pub async fn list_images(
    State(state): State<AppState>,
    Query(query): Query<ListImagesQuery>,
) -> Result<Response<ListImagesResponse>, ApiError> {
    let pagination = OffsetLimit {
        offset: query.offset.unwrap_or(0),
        limit: query
            .limit
            .unwrap_or(state.args.defaults.default_page_size)
            .min(state.args.defaults.default_page_size),
    };

    let images = state
        .service
        .list_images(
            StoredImageFilter {
                mime_type: query.mime_type,
            },
            pagination,
        )
        .await
        .map_err(|e| {
            tracing::error!("Failed to list images: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(ListImagesResponse {
        items: images.items,
        offset: pagination.offset,
        limit: pagination.limit,
        total: images.total,
    }))
}
