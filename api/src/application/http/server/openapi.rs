use utoipa::OpenApi;

use crate::application::http::{
    customer::router::CustomerApiDoc, media::router::MediaApiDoc, order::router::OrderApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Orderdesk API",
        description = "Administrative backend for orders, customers and media"
    ),
    tags(
        (name = "order", description = "Order management"),
        (name = "customer", description = "Customer management"),
        (name = "media", description = "Product and customer images")
    )
)]
pub struct ApiDoc;

pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(OrderApiDoc::openapi());
    doc.merge(CustomerApiDoc::openapi());
    doc.merge(MediaApiDoc::openapi());
    doc
}
