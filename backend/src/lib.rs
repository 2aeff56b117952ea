pub mod error;
pub mod services;
pub mod store;
