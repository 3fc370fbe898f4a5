use crate::errors::Result;

/// Persistence port for the chart "live mode" toggle.
///
/// The flag is read once at initialization and written on toggle. Hosts back
/// it with whatever medium they persist UI preferences to; the default store
/// keeps it in memory.
pub trait LiveModeStoreTrait: Send + Sync {
    fn load(&self) -> Result<bool>;
    fn save(&self, enabled: bool) -> Result<()>;
}
