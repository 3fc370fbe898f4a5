pub mod calendar_model;
pub mod calendar_service;
pub mod calendar_traits;

pub use calendar_model::*;
pub use calendar_service::*;
pub use calendar_traits::{CalendarServiceTrait, TradingSessionProviderTrait};
