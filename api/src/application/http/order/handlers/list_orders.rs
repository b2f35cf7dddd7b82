use axum::extract::State;
use orderdesk_core::domain::order::{
    entities::Order, ports::OrderRepository, value_objects::OrderListParams,
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
pub struct ListOrdersResponse {
    pub items: Vec<Order>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

#[utoipa::path(
    get,
    path = "/orders",
    tag = "order",
    summary = "List orders",
    description = "List orders with pagination, sorting, range filters and search. \
        Supported query parameters: page, limit, sortField, sortOrder, status, \
        totalAmountFrom, totalAmountTo, orderDateFrom, orderDateTo, search.",
    responses(
        (status = 200, body = ListOrdersResponse),
        (status = 400, description = "Invalid query parameter")
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
    RawParamsExtractor(raw): RawParamsExtractor,
) -> Result<Response<ListOrdersResponse>, ApiError> {
    let params = OrderListParams::from_raw(&raw, state.args.defaults.default_page_size)?;
    let (page, limit) = (params.page, params.limit);

    let orders = state.order_repository.list(params).await.map_err(|e| {
        tracing::error!("Failed to list orders: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(ListOrdersResponse {
        items: orders.items,
        page,
        limit,
        total: orders.total,
    }))
}
