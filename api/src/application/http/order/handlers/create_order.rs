use axum::{Json, extract::State};
use orderdesk_core::domain::order::{
    entities::{Order, OrderConfig, is_known_status},
    ports::OrderRepository,
};
use validator::Validate;

use crate::application::http::{
    order::validators::CreateOrderRequest,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/orders",
    tag = "order",
    summary = "Create an order",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, body = Order),
        (status = 400, description = "Invalid request body")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Response<Order>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let status = request.status.unwrap_or_else(|| "new".to_string());
    if !is_known_status(&status) {
        return Err(ApiError::BadRequest(format!(
            "unknown order status '{status}'"
        )));
    }

    let order_number = state
        .order_repository
        .next_order_number()
        .await
        .map_err(|e| {
            tracing::error!("Failed to reserve order number: {}", e);
            ApiError::from(e)
        })?;

    let order = Order::new(OrderConfig {
        order_number,
        customer_id: request.customer_id,
        customer_name: request.customer_name,
        customer_email: request.customer_email,
        status,
        items: request.items.into_iter().map(Into::into).collect(),
        shipping_address: request.shipping_address.into(),
        order_date: request.order_date.unwrap_or_else(chrono::Utc::now),
        notes: request.notes,
    });

    let created = state.order_repository.create(order).await.map_err(|e| {
        tracing::error!("Failed to create order: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::Created(created))
}
