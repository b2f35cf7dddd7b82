use super::handlers::{
    create_order::{__path_create_order, create_order},
    delete_order::{__path_delete_order, delete_order},
    get_order::{__path_get_order, get_order},
    list_orders::{__path_list_orders, list_orders},
    update_order::{__path_update_order, update_order},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_orders, get_order, create_order, update_order, delete_order))]
pub struct OrderApiDoc;

pub fn order_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/orders", state.args.server.root_path),
            get(list_orders).post(create_order),
        )
        .route(
            &format!("{}/orders/{{order_id}}", state.args.server.root_path),
            get(get_order).put(update_order).delete(delete_order),
        )
}
