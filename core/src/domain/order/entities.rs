use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Statuses an order may carry. Anything else is rejected at the filter
/// and write boundaries.
pub const ORDER_STATUSES: &[&str] = &["new", "processing", "shipped", "delivered", "cancelled"];

pub fn is_known_status(status: &str) -> bool {
    ORDER_STATUSES.contains(&status)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub product_id: Option<Uuid>,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub order_number: i64,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub status: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub shipping_address: ShippingAddress,
    pub order_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct OrderConfig {
    pub order_number: i64,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub status: String,
    pub items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    pub order_date: DateTime<Utc>,
    pub notes: Option<String>,
}

impl Order {
    pub fn new(config: OrderConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            order_number: config.order_number,
            customer_id: config.customer_id,
            customer_name: config.customer_name,
            customer_email: config.customer_email,
            status: config.status,
            total_amount: compute_total(&config.items),
            items: config.items,
            shipping_address: config.shipping_address,
            order_date: config.order_date,
            notes: config.notes,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        status: Option<String>,
        items: Option<Vec<OrderItem>>,
        shipping_address: Option<ShippingAddress>,
        notes: Option<String>,
    ) {
        let (now, _) = generate_timestamp();

        if let Some(s) = status {
            self.status = s;
        }
        if let Some(i) = items {
            self.total_amount = compute_total(&i);
            self.items = i;
        }
        if let Some(a) = shipping_address {
            self.shipping_address = a;
        }
        if let Some(n) = notes {
            self.notes = Some(n);
        }
        self.updated_at = now;
    }
}

fn compute_total(items: &[OrderItem]) -> f64 {
    items
        .iter()
        .map(|item| f64::from(item.quantity) * item.unit_price)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: u32, unit_price: f64) -> OrderItem {
        OrderItem {
            product_id: None,
            name: name.to_string(),
            quantity,
            unit_price,
        }
    }

    fn address() -> ShippingAddress {
        ShippingAddress {
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            postal_code: "12345".to_string(),
            country: "US".to_string(),
        }
    }

    #[test]
    fn new_order_derives_total_from_items() {
        let order = Order::new(OrderConfig {
            order_number: 1001,
            customer_id: Uuid::new_v4(),
            customer_name: "Ada Lovelace".to_string(),
            customer_email: "ada@example.com".to_string(),
            status: "new".to_string(),
            items: vec![item("widget", 2, 9.99), item("gadget", 1, 25.0)],
            shipping_address: address(),
            order_date: Utc::now(),
            notes: None,
        });

        assert_eq!(order.total_amount, 2.0 * 9.99 + 25.0);
        assert_eq!(order.status, "new");
    }

    #[test]
    fn update_with_items_recomputes_total() {
        let mut order = Order::new(OrderConfig {
            order_number: 1002,
            customer_id: Uuid::new_v4(),
            customer_name: "Ada Lovelace".to_string(),
            customer_email: "ada@example.com".to_string(),
            status: "new".to_string(),
            items: vec![item("widget", 1, 10.0)],
            shipping_address: address(),
            order_date: Utc::now(),
            notes: None,
        });

        order.update(
            Some("processing".to_string()),
            Some(vec![item("widget", 3, 10.0)]),
            None,
            None,
        );

        assert_eq!(order.status, "processing");
        assert_eq!(order.total_amount, 30.0);
    }

    #[test]
    fn status_allow_list_covers_lifecycle() {
        assert!(is_known_status("new"));
        assert!(is_known_status("cancelled"));
        assert!(!is_known_status("NEW"));
        assert!(!is_known_status("archived"));
    }
}
