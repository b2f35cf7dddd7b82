use axum::extract::{Path, State};
use orderdesk_core::domain::order::ports::OrderRepository;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/orders/{order_id}",
    tag = "order",
    summary = "Delete an order",
    params(
        ("order_id" = Uuid, Path, description = "Order ID"),
    ),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn delete_order(
    Path(order_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .order_repository
        .delete(order_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
