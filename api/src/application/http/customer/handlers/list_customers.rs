use axum::extract::State;
use orderdesk_core::domain::customer::{
    entities::Customer, ports::CustomerRepository, value_objects::CustomerListParams,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    query_extractor::RawParamsExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListCustomersResponse {
    pub items: Vec<Customer>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

#[utoipa::path(
    get,
    path = "/customers",
    tag = "customer",
    summary = "List customers",
    description = "List customers with pagination, sorting, range filters and search. \
        Supported query parameters: page, limit, sortField, sortOrder, \
        registrationDateFrom, registrationDateTo, lastOrderDateFrom, lastOrderDateTo, \
        totalAmountFrom, totalAmountTo, orderCountFrom, orderCountTo, search.",
    responses(
        (status = 200, body = ListCustomersResponse),
        (status = 400, description = "Invalid query parameter")
    )
)]
pub async fn list_customers(
    State(state): State<AppState>,
    RawParamsExtractor(raw): RawParamsExtractor,
) -> Result<Response<ListCustomersResponse>, ApiError> {
    let params = CustomerListParams::from_raw(&raw, state.args.defaults.default_page_size)?;
    let (page, limit) = (params.page, params.limit);

    let customers = state.customer_repository.list(params).await.map_err(|e| {
        tracing::error!("Failed to list customers: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(ListCustomersResponse {
        items: customers.items,
        page,
        limit,
        total: customers.total,
    }))
}
