use axum::{Json, extract::State};
use orderdesk_core::domain::customer::{
    entities::{Customer, CustomerConfig},
    phone::normalize_phone,
    ports::CustomerRepository,
};
use validator::Validate;

use crate::application::http::{
    customer::validators::CreateCustomerRequest,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/customers",
    tag = "customer",
    summary = "Create a customer",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, body = Customer),
        (status = 400, description = "Invalid request body")
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerRequest>,
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

    let customer = Customer::new(CustomerConfig {
        first_name: request.first_name,
        last_name: request.last_name,
        email: request.email,
        phone,
        avatar_image_id: request.avatar_image_id,
    });

    let created = state
        .customer_repository
        .create(customer)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create customer: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::Created(created))
}
