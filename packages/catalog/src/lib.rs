// src/lib.rs

pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{Result, StoreError};
pub use model::{Customer, CustomerStatus, Product};
pub use repository::{JsonCustomerRepository, JsonProductRepository, JsonRepository, Repository};
pub use service::customer::CustomerService;
pub use service::product::ProductService;
pub use store::{find_by_id, Identified, Lookup, Record};
