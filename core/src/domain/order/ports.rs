use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::{app_errors::CoreError, pagination::Paginated},
    order::{entities::Order, value_objects::OrderListParams},
};

/// Repository trait for orders
#[cfg_attr(test, mockall::automock)]
pub trait OrderRepository: Send + Sync {
    fn list(
        &self,
        params: OrderListParams,
    ) -> impl Future<Output = Result<Paginated<Order>, CoreError>> + Send;

    fn get_by_id(
        &self,
        order_id: Uuid,
    ) -> impl Future<Output = Result<Option<Order>, CoreError>> + Send;

    fn create(&self, order: Order) -> impl Future<Output = Result<Order, CoreError>> + Send;

    fn update(&self, order: Order) -> impl Future<Output = Result<Order, CoreError>> + Send;

    fn delete(&self, order_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Atomically reserve the next order number.
    fn next_order_number(&self) -> impl Future<Output = Result<i64, CoreError>> + Send;
}
