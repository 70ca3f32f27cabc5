pub mod context;
pub mod generator_service;

pub use context::ServiceContext;
