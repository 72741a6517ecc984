//! User settings for the finance tracker
//!
//! Manages where the ledger file lives and how chatty logging is.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Ledger file location; defaults to `finance_data.json` in the base dir
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Log level for this crate when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            data_file: None,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Config(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the ledger file path
    ///
    /// Relative `data_file` values are taken relative to the base directory.
    pub fn ledger_path(&self, paths: &TrackerPaths) -> PathBuf {
        match &self.data_file {
            Some(file) if file.is_absolute() => file.clone(),
            Some(file) => paths.base_dir().join(file),
            None => paths.ledger_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert!(settings.data_file.is_none());
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            data_file: Some(PathBuf::from("ledger.json")),
            log_level: "debug".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.data_file, Some(PathBuf::from("ledger.json")));
        assert_eq!(loaded.log_level, "debug");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_malformed_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ nope").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }

    #[test]
    fn test_ledger_path_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        assert_eq!(settings.ledger_path(&paths), paths.ledger_file());

        settings.data_file = Some(PathBuf::from("books.json"));
        assert_eq!(
            settings.ledger_path(&paths),
            temp_dir.path().join("books.json")
        );

        let absolute = temp_dir.path().join("elsewhere").join("books.json");
        settings.data_file = Some(absolute.clone());
        assert_eq!(settings.ledger_path(&paths), absolute);
    }
}
