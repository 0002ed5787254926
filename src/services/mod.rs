pub mod customers;
pub mod employees;
pub mod errors;
pub mod export;
pub mod fixtures;
pub mod listing;
pub mod suppliers;

pub use errors::{ServiceError, ServiceResult};
