pub mod mappers;
pub mod repositories;

pub use repositories::order_repository::MongoOrderRepository;
