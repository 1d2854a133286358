//! Settings merging with precedence rules
//!
//! Files are applied from lowest to highest precedence, starting from the
//! built-in defaults. A key present in a later file overrides the value set so
//! far; absent keys leave it untouched.

use std::fs;
use std::path::Path;

use anyhow::Context;
use log::debug;

use super::discovery::ConfigFiles;
use super::types::{Settings, SettingsFile};

/// Settings merger
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge settings files with precedence rules
    ///
    /// Precedence order (highest to lowest):
    /// 1. CLI settings file
    /// 2. .snipdex.toml
    /// 3. Global settings file
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file cannot be read or parsed.
    pub fn merge(files: &ConfigFiles) -> anyhow::Result<Settings> {
        let mut merged = Settings::default();

        for path in files.in_merge_order() {
            Self::merge_into(&mut merged, path)?;
        }

        Ok(merged)
    }

    /// Load a single settings file and overlay it onto `base`
    fn merge_into(base: &mut Settings, path: &Path) -> anyhow::Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        let file: SettingsFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

        debug!("Applying settings from {}", path.display());
        base.apply(file);

        Ok(())
    }
}
