pub mod benchmark_model;
pub mod benchmark_service;
pub mod benchmark_traits;

pub use benchmark_model::*;
pub use benchmark_service::*;
pub use benchmark_traits::{BenchmarkProviderTrait, BenchmarkServiceTrait};
