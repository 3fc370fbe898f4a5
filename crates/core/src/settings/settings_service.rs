use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::warn;

use super::settings_traits::LiveModeStoreTrait;
use crate::errors::Result;

/// In-memory live-mode store, used when the host injects nothing else.
#[derive(Default)]
pub struct MemoryLiveModeStore {
    enabled: AtomicBool,
}

impl LiveModeStoreTrait for MemoryLiveModeStore {
    fn load(&self) -> Result<bool> {
        Ok(self.enabled.load(Ordering::Relaxed))
    }

    fn save(&self, enabled: bool) -> Result<()> {
        self.enabled.store(enabled, Ordering::Relaxed);
        Ok(())
    }
}

/// Chart settings backed by an injected persistence port.
pub struct ChartSettingsService {
    store: Arc<dyn LiveModeStoreTrait>,
    live_enabled: AtomicBool,
}

impl ChartSettingsService {
    /// Reads the persisted flag once; a failed load falls back to disabled.
    pub fn new(store: Arc<dyn LiveModeStoreTrait>) -> Self {
        let live_enabled = store.load().unwrap_or_else(|err| {
            warn!("Failed to load live-mode flag: {}; defaulting to off", err);
            false
        });
        Self {
            store,
            live_enabled: AtomicBool::new(live_enabled),
        }
    }

    pub fn is_live_enabled(&self) -> bool {
        self.live_enabled.load(Ordering::Relaxed)
    }

    /// Toggles live mode and writes through to the store. A failed save is
    /// logged, not surfaced; the in-memory value is already current.
    pub fn set_live_enabled(&self, enabled: bool) {
        self.live_enabled.store(enabled, Ordering::Relaxed);
        if let Err(err) = self.store.save(enabled) {
            warn!("Failed to persist live-mode flag: {}", err);
        }
    }
}
