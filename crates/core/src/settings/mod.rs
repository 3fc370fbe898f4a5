pub mod settings_service;
pub mod settings_traits;

pub use settings_service::{ChartSettingsService, MemoryLiveModeStore};
pub use settings_traits::LiveModeStoreTrait;
