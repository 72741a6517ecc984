//! Path management for the finance tracker
//!
//! ## Path Resolution Order
//!
//! 1. `FINANCE_TRACKER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/finance-tracker` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TrackerError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FINANCE_TRACKER_DATA_DIR";

/// Manages all paths used by the finance tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Base directory for settings and data
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, TrackerError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default path of the ledger file
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("finance_data.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if settings have been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, TrackerError> {
    ProjectDirs::from("", "", "finance-tracker")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TrackerError::Config("Could not determine home directory".into()))
}
