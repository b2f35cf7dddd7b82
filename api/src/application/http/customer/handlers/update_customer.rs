use axum::{
    Json,
    extract::{Path, State},
};
use orderdesk_core::domain::customer::{
    entities::Customer, phone::normalize_phone, ports::CustomerRepository,
};
use uuid::Uuid;
use validator::Validate;

use crate::application::http::{
    customer::validators::UpdateCustomerRequest,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/customers/{customer_id}",
    tag = "customer",
    summary = "Update a customer",
    request_body = UpdateCustomerRequest,
    params(
        ("customer_id" = Uuid, Path, description = "Customer ID"),
    ),
    responses(
        (status = 200, body = Customer),
        (status = 400, description = "Invalid request body"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update_customer(
    Path(customer_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(request): Json<UpdateCustomerRequest>,
) -> Result<Response<Customer>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let phone = request
        .phone
        .as_deref()
        .map(|raw| {
            normalize_phone(raw, &state.args.defaults.default_phone_region)
                .ok_or_else(|| ApiError::BadRequest(format!("'{raw}' is not a phone number")))
        })
        .transpose()?;

    let mut customer = state
        .customer_repository
        .get_by_id(customer_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("customer {customer_id} not found")))?;

    customer.update(
        request.first_name,
        request.last_name,
        request.email,
        phone,
        request.avatar_image_id,
    );

    let updated = state
        .customer_repository
        .update(customer)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update customer: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(updated))
}
