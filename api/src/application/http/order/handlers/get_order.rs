use axum::extract::{Path, State};
use orderdesk_core::domain::order::{entities::Order, ports::OrderRepository};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    tag = "order",
    summary = "Get an order",
    params(
        ("order_id" = Uuid, Path, description = "Order ID"),
    ),
    responses(
        (status = 200, body = Order),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    Path(order_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<Order>, ApiError> {
    let order = state
        .order_repository
        .get_by_id(order_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("order {order_id} not found")))?;

    Ok(Response::OK(order))
}
