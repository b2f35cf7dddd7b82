use super::handlers::{
    create_customer::{__path_create_customer, create_customer},
    delete_customer::{__path_delete_customer, delete_customer},
    get_customer::{__path_get_customer, get_customer},
    list_customers::{__path_list_customers, list_customers},
    update_customer::{__path_update_customer, update_customer},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    list_customers,
    get_customer,
    create_customer,
    update_customer,
    delete_customer
))]
pub struct CustomerApiDoc;

pub fn customer_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/customers", state.args.server.root_path),
            get(list_customers).post(create_customer),
        )
        .route(
            &format!("{}/customers/{{customer_id}}", state.args.server.root_path),
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}
