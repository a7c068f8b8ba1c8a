// Application state module
// Shared, immutable runtime state for the request path

use std::sync::atomic::{AtomicBool, Ordering};

use super::types::Config;

/// Application state shared across connections
pub struct AppState {
    pub config: Config,
    // Cached config value for fast access without touching Config
    cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let cached_access_log = AtomicBool::new(config.logging.access_log);
        Self {
            config,
            cached_access_log,
        }
    }

    /// Whether access logging is enabled (lock-free)
    pub fn access_log(&self) -> bool {
        self.cached_access_log.load(Ordering::Relaxed)
    }
}
