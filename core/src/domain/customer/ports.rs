use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::{app_errors::CoreError, pagination::Paginated},
    customer::{entities::Customer, value_objects::CustomerListParams},
};

/// Repository trait for customers
#[cfg_attr(test, mockall::automock)]
pub trait CustomerRepository: Send + Sync {
    fn list(
        &self,
        params: CustomerListParams,
    ) -> impl Future<Output = Result<Paginated<Customer>, CoreError>> + Send;

    fn get_by_id(
        &self,
        customer_id: Uuid,
    ) -> impl Future<Output = Result<Option<Customer>, CoreError>> + Send;

    fn create(
        &self,
        customer: Customer,
    ) -> impl Future<Output = Result<Customer, CoreError>> + Send;

    fn update(
        &self,
        customer: Customer,
    ) -> impl Future<Output = Result<Customer, CoreError>> + Send;

    fn delete(&self, customer_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
