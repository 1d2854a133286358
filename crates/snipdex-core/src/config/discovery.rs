//! Settings file discovery from multiple locations

use std::path::{Path, PathBuf};

/// Project settings file name, looked up from the current directory upwards
pub const PROJECT_FILE_NAME: &str = ".snipdex.toml";

/// Settings file locations in order of precedence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigFiles {
    /// File from the `--config` flag (highest precedence)
    pub cli: Option<PathBuf>,
    /// Project file (.snipdex.toml)
    pub project: Option<PathBuf>,
    /// Global XDG file
    pub global: Option<PathBuf>,
}

impl ConfigFiles {
    /// Discovered files, lowest precedence first
    pub fn in_merge_order(&self) -> impl Iterator<Item = &Path> {
        [&self.global, &self.project, &self.cli]
            .into_iter()
            .filter_map(|p| p.as_deref())
    }
}

/// Settings file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Discover all available settings files
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly requested file does not exist.
    pub fn discover(cli_path: Option<&Path>) -> anyhow::Result<ConfigFiles> {
        let cli = match cli_path {
            Some(path) if path.is_file() => Some(path.to_path_buf()),
            Some(path) => anyhow::bail!("Settings file not found: {}", path.display()),
            None => None,
        };

        let project = std::env::current_dir()
            .ok()
            .and_then(|dir| Self::find_upwards(&dir, PROJECT_FILE_NAME));
        let global = Self::find_global_config();

        Ok(ConfigFiles {
            cli,
            project,
            global,
        })
    }

    /// Find a file in `start` or any of its parent directories
    fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Find global settings in the XDG config directory
    fn find_global_config() -> Option<PathBuf> {
        let global_config = dirs::config_dir()?.join("snipdex").join("config.toml");

        global_config.is_file().then_some(global_config)
    }
}
