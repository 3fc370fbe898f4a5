pub mod merge_service;
pub mod performance_model;

pub use merge_service::*;
pub use performance_model::*;
