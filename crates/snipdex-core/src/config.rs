//! Settings file parsing, merging, and validation
//!
//! This module handles:
//! - Settings file discovery from multiple locations
//! - TOML parsing with serde
//! - Merging with override precedence
//! - Validation and error reporting
//!
//! The catalog pipeline never reads settings itself; hosts load a
//! [`Settings`] value once and pass the fields it needs.

mod discovery;
mod merge;
mod types;
mod validation;

#[cfg(test)]
mod integration_tests;

use std::path::Path;

pub use discovery::{ConfigDiscovery, ConfigFiles};
pub use merge::ConfigMerger;
pub use types::{DEFAULT_BACKUP_FOLDER, Settings, SettingsFile};
pub use validation::ConfigValidator;

/// Coordinates discovery, parsing, merging, and validation
pub struct ConfigManager;

impl ConfigManager {
    /// Load and merge settings from all discovered files
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file cannot be read or parsed, or if
    /// the merged settings are invalid.
    pub fn load(cli_config_path: Option<&Path>) -> anyhow::Result<Settings> {
        let files = ConfigDiscovery::discover(cli_config_path)?;

        let merged = ConfigMerger::merge(&files)?;

        ConfigValidator::validate(&merged)?;

        Ok(merged)
    }

    /// Built-in defaults, ignoring every settings file
    ///
    /// # Errors
    ///
    /// Returns an error if the defaults fail validation.
    pub fn defaults() -> anyhow::Result<Settings> {
        let settings = Settings::default();
        ConfigValidator::validate(&settings)?;
        Ok(settings)
    }
}
