use axum::{
    Json,
    extract::{Path, State},
};
use orderdesk_core::domain::order::{
    entities::{Order, is_known_status},
    ports::OrderRepository,
};
use uuid::Uuid;
use validator::Validate;

use crate::application::http::{
    order::validators::UpdateOrderRequest,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/orders/{order_id}",
    tag = "order",
    summary = "Update an order",
    request_body = UpdateOrderRequest,
    params(
        ("order_id" = Uuid, Path, description = "Order ID"),
    ),
    responses(
        (status = 200, body = Order),
        (status = 400, description = "Invalid request body"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn update_order(
    Path(order_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(request): Json<UpdateOrderRequest>,
) -> Result<Response<Order>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    if let Some(status) = &request.status {
        if !is_known_status(status) {
            return Err(ApiError::BadRequest(format!(
                "unknown order status '{status}'"
            )));
        }
    }

    let mut order = state
        .order_repository
        .get_by_id(order_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("order {order_id} not found")))?;

    order.update(
        request.status,
        request
            .items
            .map(|items| items.into_iter().map(Into::into).collect()),
        request.shipping_address.map(Into::into),
        request.notes,
    );

    let updated = state.order_repository.update(order).await.map_err(|e| {
        tracing::error!("Failed to update order: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(updated))
}
