use bson::DateTime as BsonDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, customer::entities::Customer};

/// Persistence model for the `customers` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub registration_date: BsonDateTime,
    pub last_order_date: Option<BsonDateTime>,
    pub total_amount: f64,
    pub order_count: i64,
    pub avatar_image_id: Option<String>,
    pub created_at: BsonDateTime,
    pub updated_at: BsonDateTime,
}

impl From<&Customer> for CustomerDocument {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.to_string(),
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            registration_date: BsonDateTime::from_chrono(customer.registration_date),
            last_order_date: customer.last_order_date.map(BsonDateTime::from_chrono),
            total_amount: customer.total_amount,
            order_count: customer.order_count,
            avatar_image_id: customer.avatar_image_id.map(|id| id.to_string()),
            created_at: BsonDateTime::from_chrono(customer.created_at),
            updated_at: BsonDateTime::from_chrono(customer.updated_at),
        }
    }
}

pub fn map_customer(document: CustomerDocument) -> Result<Customer, CoreError> {
    Ok(Customer {
        id: parse_uuid(&document.id)?,
        first_name: document.first_name,
        last_name: document.last_name,
        email: document.email,
        phone: document.phone,
        registration_date: document.registration_date.to_chrono(),
        last_order_date: document.last_order_date.map(|d| d.to_chrono()),
        total_amount: document.total_amount,
        order_count: document.order_count,
        avatar_image_id: document
            .avatar_image_id
            .as_deref()
            .map(parse_uuid)
            .transpose()?,
        created_at: document.created_at.to_chrono(),
        updated_at: document.updated_at.to_chrono(),
    })
}

fn parse_uuid(raw: &str) -> Result<Uuid, CoreError> {
    Uuid::parse_str(raw).map_err(|e| {
        tracing::error!("Corrupt UUID '{}' in customers collection: {}", raw, e);
        CoreError::InternalServerError
    })
}
