use std::sync::Arc;

use orderdesk_core::{
    application::OrderdeskService,
    infrastructure::{customer::MongoCustomerRepository, order::MongoOrderRepository},
};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: OrderdeskService,
    pub order_repository: Arc<MongoOrderRepository>,
    pub customer_repository: Arc<MongoCustomerRepository>,
}

impl AppState {
    pub fn new(
        args: Arc<Args>,
        service: OrderdeskService,
        order_repository: MongoOrderRepository,
        customer_repository: MongoCustomerRepository,
    ) -> Self {
        Self {
            args,
            service,
            order_repository: Arc::new(order_repository),
            customer_repository: Arc::new(customer_repository),
        }
    }
}
