use chrono::{DateTime, Utc};
use orderdesk_core::domain::order::entities::{OrderItem, ShippingAddress};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct OrderItemRequest {
    pub product_id: Option<Uuid>,
    #[validate(length(min = 1, message = "item name must not be empty"))]
    pub name: String,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: u32,
    #[validate(range(min = 0.0, message = "unit_price must not be negative"))]
    pub unit_price: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AddressRequest {
    #[validate(length(min = 1, message = "street must not be empty"))]
    pub street: String,
    #[validate(length(min = 1, message = "city must not be empty"))]
    pub city: String,
    #[validate(length(min = 1, message = "postal_code must not be empty"))]
    pub postal_code: String,
    #[validate(length(min = 1, message = "country must not be empty"))]
    pub country: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateOrderRequest {
    pub customer_id: Uuid,
    #[validate(length(min = 1, message = "customer_name must not be empty"))]
    pub customer_name: String,
    #[validate(email(message = "customer_email must be a valid email address"))]
    pub customer_email: String,
    /// Defaults to `new` when omitted.
    pub status: Option<String>,
    #[validate(length(min = 1, message = "an order needs at least one item"), nested)]
    pub items: Vec<OrderItemRequest>,
    #[validate(nested)]
    pub shipping_address: AddressRequest,
    /// Defaults to the current instant when omitted.
    pub order_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateOrderRequest {
    pub status: Option<String>,
    #[validate(nested)]
    pub items: Option<Vec<OrderItemRequest>>,
    #[validate(nested)]
    pub shipping_address: Option<AddressRequest>,
    pub notes: Option<String>,
}

impl From<OrderItemRequest> for OrderItem {
    fn from(request: OrderItemRequest) -> Self {
        Self {
            product_id: request.product_id,
            name: request.name,
            quantity: request.quantity,
            unit_price: request.unit_price,
        }
    }
}

impl From<AddressRequest> for ShippingAddress {
    fn from(request: AddressRequest) -> Self {
        Self {
            street: request.street,
            city: request.city,
            postal_code: request.postal_code,
            country: request.country,
        }
    }
}
