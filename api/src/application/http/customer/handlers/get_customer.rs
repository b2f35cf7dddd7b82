use axum::extract::{Path, State};
use orderdesk_core::domain::customer::{entities::Customer, ports::CustomerRepository};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/customers/{customer_id}",
    tag = "customer",
    summary = "Get a customer",
    params(
        ("customer_id" = Uuid, Path, description = "Customer ID"),
    ),
    responses(
        (status = 200, body = Customer),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    Path(customer_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<Customer>, ApiError> {
    let customer = state
        .customer_repository
        .get_by_id(customer_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("customer {customer_id} not found")))?;

    Ok(Response::OK(customer))
}
