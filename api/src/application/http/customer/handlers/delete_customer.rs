use axum::extract::{Path, State};
use orderdesk_core::domain::customer::ports::CustomerRepository;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/customers/{customer_id}",
    tag = "customer",
    summary = "Delete a customer",
    params(
        ("customer_id" = Uuid, Path, description = "Customer ID"),
    ),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    Path(customer_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .customer_repository
        .delete(customer_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
