//! Configuration service.
//!
//! Loads `SearchbotConfig` from the optional TOML configuration file and
//! applies environment overrides on top. The result is cached; absence or
//! unreadability of the file falls back to defaults.

use std::path::Path;
use std::sync::{Arc, RwLock};

use searchbot_core::config::{ENV_API_BASE_URL, ENV_ENABLE_LIVE_SEARCH, SearchbotConfig};

use crate::paths::SearchbotPaths;

/// Loads and caches the runtime configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    paths: SearchbotPaths,
    config: Arc<RwLock<Option<SearchbotConfig>>>,
}

impl ConfigService {
    /// Creates a service reading from the platform config directory.
    pub fn new() -> Self {
        Self::with_base_dir(None)
    }

    /// Creates a service reading `config.toml` under `base_dir` (tests).
    pub fn with_base_dir(base_dir: Option<&Path>) -> Self {
        Self {
            paths: SearchbotPaths::new(base_dir),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the configuration, loading file and environment on first
    /// access.
    pub fn get_config(&self) -> SearchbotConfig {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config();

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    fn load_config(&self) -> SearchbotConfig {
        let from_file = self.load_file().unwrap_or_default();
        from_file.with_overrides(
            std::env::var(ENV_API_BASE_URL).ok(),
            std::env::var(ENV_ENABLE_LIVE_SEARCH).ok(),
        )
    }

    fn load_file(&self) -> Option<SearchbotConfig> {
        let path = self.paths.config_file().ok()?;
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!("failed to read config file {:?}: {}", path, err);
                return None;
            }
        };

        match toml::from_str(&raw) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("failed to parse config file {:?}, using defaults: {}", path, err);
                None
            }
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
