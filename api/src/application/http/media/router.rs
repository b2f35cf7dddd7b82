use super::handlers::{
    delete_image::{__path_delete_image, delete_image},
    get_image_url::{__path_get_image_url, get_image_url},
    list_images::{__path_list_images, list_images},
    upload_image::{__path_upload_image, upload_image},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(upload_image, list_images, get_image_url, delete_image))]
pub struct MediaApiDoc;

pub fn media_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/images", state.args.server.root_path),
            post(upload_image).get(list_images),
        )
        .route(
            &format!("{}/images/{{image_id}}", state.args.server.root_path),
            axum::routing::delete(delete_image),
        )
        .route(
            &format!(
                "{}/images/{{image_id}}/download-url",
                state.args.server.root_path
            ),
            get(get_image_url),
        )
}
