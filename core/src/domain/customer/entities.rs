use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Canonical E.164, normalized on the way in.
    pub phone: Option<String>,
    pub registration_date: DateTime<Utc>,
    pub last_order_date: Option<DateTime<Utc>>,
    pub total_amount: f64,
    pub order_count: i64,
    pub avatar_image_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CustomerConfig {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar_image_id: Option<Uuid>,
}

impl Customer {
    pub fn new(config: CustomerConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            first_name: config.first_name,
            last_name: config.last_name,
            email: config.email,
            phone: config.phone,
            registration_date: now,
            last_order_date: None,
            total_amount: 0.0,
            order_count: 0,
            avatar_image_id: config.avatar_image_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        avatar_image_id: Option<Uuid>,
    ) {
        let (now, _) = generate_timestamp();

        if let Some(f) = first_name {
            self.first_name = f;
        }
        if let Some(l) = last_name {
            self.last_name = l;
        }
        if let Some(e) = email {
            self.email = e;
        }
        if let Some(p) = phone {
            self.phone = Some(p);
        }
        if let Some(a) = avatar_image_id {
            self.avatar_image_id = Some(a);
        }
        self.updated_at = now;
    }

    /// Roll an order's contribution into the aggregates the list filters
    /// range over.
    pub fn record_order(&mut self, amount: f64, order_date: DateTime<Utc>) {
        let (now, _) = generate_timestamp();

        self.total_amount += amount;
        self.order_count += 1;
        self.last_order_date = match self.last_order_date {
            Some(previous) if previous > order_date => Some(previous),
            _ => Some(order_date),
        };
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn customer() -> Customer {
        Customer::new(CustomerConfig {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: None,
            avatar_image_id: None,
        })
    }

    #[test]
    fn new_customer_starts_with_empty_aggregates() {
        let c = customer();
        assert_eq!(c.order_count, 0);
        assert_eq!(c.total_amount, 0.0);
        assert_eq!(c.last_order_date, None);
    }

    #[test]
    fn record_order_accumulates_and_keeps_latest_date() {
        let mut c = customer();
        let earlier = Utc.with_ymd_and_hms(2024, 1, 10, 8, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 2, 20, 8, 0, 0).unwrap();

        c.record_order(50.0, later);
        c.record_order(25.0, earlier);

        assert_eq!(c.order_count, 2);
        assert_eq!(c.total_amount, 75.0);
        assert_eq!(c.last_order_date, Some(later));
    }
}
