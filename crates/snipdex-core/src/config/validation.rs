//! Settings validation and error reporting

use super::types::Settings;

/// Settings validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate merged settings
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid.
    pub fn validate(settings: &Settings) -> anyhow::Result<()> {
        if settings.backup_folder.trim().is_empty() {
            anyhow::bail!("backup_folder cannot be empty");
        }

        Ok(())
    }
}
