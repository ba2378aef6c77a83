//! Application services built on the storage layer

mod product_service;

pub use product_service::ProductService;
