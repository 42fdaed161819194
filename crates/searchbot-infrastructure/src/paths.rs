//! Unified path management for SearchBot storage and configuration.
//!
//! Documents live under the platform data directory and configuration under
//! the platform config directory. A base-directory override routes both
//! under one root, used by tests and embedders.

use std::path::{Path, PathBuf};

use searchbot_core::error::{Result, SearchbotError};

/// Resolves the directories SearchBot reads and writes.
///
/// # Directory Structure
///
/// ```text
/// ~/.local/share/searchbot/        # Data directory
/// ├── searchbot_history.json       # Search history document
/// └── searchbot_user.json          # User profile document
///
/// ~/.config/searchbot/             # Config directory
/// └── config.toml                  # Optional configuration file
/// ```
#[derive(Debug, Clone)]
pub struct SearchbotPaths {
    base_dir: Option<PathBuf>,
}

impl SearchbotPaths {
    /// Creates a path resolver. With `Some(base)`, all paths resolve under
    /// that directory instead of the platform defaults.
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            base_dir: base_dir.map(Path::to_path_buf),
        }
    }

    /// Returns the directory holding the durable JSON documents.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base_dir {
            return Ok(base.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join("searchbot"))
            .ok_or_else(|| SearchbotError::config("Cannot determine platform data directory"))
    }

    /// Returns the path of the optional configuration file.
    pub fn config_file(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base_dir {
            return Ok(base.join("config.toml"));
        }
        dirs::config_dir()
            .map(|dir| dir.join("searchbot").join("config.toml"))
            .ok_or_else(|| SearchbotError::config("Cannot determine platform config directory"))
    }
}
