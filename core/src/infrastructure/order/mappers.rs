use bson::DateTime as BsonDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    order::entities::{Order, OrderItem, ShippingAddress},
};

/// Persistence model for the `orders` collection. UUIDs are stored as
/// strings, the entity id under Mongo's `_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub order_number: i64,
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub status: String,
    pub items: Vec<OrderItemDocument>,
    pub total_amount: f64,
    pub shipping_address: AddressDocument,
    pub order_date: BsonDateTime,
    pub notes: Option<String>,
    pub created_at: BsonDateTime,
    pub updated_at: BsonDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemDocument {
    pub product_id: Option<String>,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressDocument {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl From<&Order> for OrderDocument {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            order_number: order.order_number,
            customer_id: order.customer_id.to_string(),
            customer_name: order.customer_name.clone(),
            customer_email: order.customer_email.clone(),
            status: order.status.clone(),
            items: order
                .items
                .iter()
                .map(|item| OrderItemDocument {
                    product_id: item.product_id.map(|id| id.to_string()),
                    name: item.name.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                })
                .collect(),
            total_amount: order.total_amount,
            shipping_address: AddressDocument {
                street: order.shipping_address.street.clone(),
                city: order.shipping_address.city.clone(),
                postal_code: order.shipping_address.postal_code.clone(),
                country: order.shipping_address.country.clone(),
            },
            order_date: BsonDateTime::from_chrono(order.order_date),
            notes: order.notes.clone(),
            created_at: BsonDateTime::from_chrono(order.created_at),
            updated_at: BsonDateTime::from_chrono(order.updated_at),
        }
    }
}

pub fn map_order(document: OrderDocument) -> Result<Order, CoreError> {
    let id = parse_uuid(&document.id)?;
    let customer_id = parse_uuid(&document.customer_id)?;

    let items = document
        .items
        .into_iter()
        .map(|item| {
            Ok(OrderItem {
                product_id: item.product_id.as_deref().map(parse_uuid).transpose()?,
                name: item.name,
                quantity: item.quantity,
                unit_price: item.unit_price,
            })
        })
        .collect::<Result<Vec<_>, CoreError>>()?;

    Ok(Order {
        id,
        order_number: document.order_number,
        customer_id,
        customer_name: document.customer_name,
        customer_email: document.customer_email,
        status: document.status,
        items,
        total_amount: document.total_amount,
        shipping_address: ShippingAddress {
            street: document.shipping_address.street,
            city: document.shipping_address.city,
            postal_code: document.shipping_address.postal_code,
            country: document.shipping_address.country,
        },
        order_date: document.order_date.to_chrono(),
        notes: document.notes,
        created_at: document.created_at.to_chrono(),
        updated_at: document.updated_at.to_chrono(),
    })
}

fn parse_uuid(raw: &str) -> Result<Uuid, CoreError> {
    Uuid::parse_str(raw).map_err(|e| {
        tracing::error!("Corrupt UUID '{}' in orders collection: {}", raw, e);
        CoreError::InternalServerError
    })
}
