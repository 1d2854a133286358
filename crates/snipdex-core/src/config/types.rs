//! Settings types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::locator::expand_tilde;

/// Where SnippetsLab keeps its automatic backups on macOS
pub const DEFAULT_BACKUP_FOLDER: &str = "~/Library/Containers/com.renfei.SnippetsLab/Data/Library/Application Support/com.renfei.SnippetsLab/Backups";

/// Resolved settings handed to hosts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Settings {
    /// Folder searched for `*.snippetslab-backup` snapshots
    pub backup_folder: String,

    /// Queries also match fragment notes
    pub search_snippets_by_notes: bool,

    /// Queries also match tags and fragment titles
    pub search_snippets_by_tags: bool,

    /// Restrict selection to the requested language bucket
    pub filter_by_language: bool,

    /// Show snippet content when listing entries
    pub show_snippets: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backup_folder: DEFAULT_BACKUP_FOLDER.to_string(),
            search_snippets_by_notes: false,
            search_snippets_by_tags: true,
            filter_by_language: false,
            show_snippets: true,
        }
    }
}

impl Settings {
    /// Backup folder with a leading `~` expanded
    #[must_use]
    pub fn backup_path(&self) -> PathBuf {
        expand_tilde(Path::new(&self.backup_folder))
    }

    /// Overlay every field present in `file`
    pub fn apply(&mut self, file: SettingsFile) {
        if let Some(backup_folder) = file.backup_folder {
            self.backup_folder = backup_folder;
        }
        if let Some(value) = file.search_snippets_by_notes {
            self.search_snippets_by_notes = value;
        }
        if let Some(value) = file.search_snippets_by_tags {
            self.search_snippets_by_tags = value;
        }
        if let Some(value) = file.filter_by_language {
            self.filter_by_language = value;
        }
        if let Some(value) = file.show_snippets {
            self.show_snippets = value;
        }
    }
}

/// One settings file as written on disk; absent keys leave the value untouched
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    /// See [`Settings::backup_folder`]
    #[serde(default)]
    pub backup_folder: Option<String>,

    /// See [`Settings::search_snippets_by_notes`]
    #[serde(default)]
    pub search_snippets_by_notes: Option<bool>,

    /// See [`Settings::search_snippets_by_tags`]
    #[serde(default)]
    pub search_snippets_by_tags: Option<bool>,

    /// See [`Settings::filter_by_language`]
    #[serde(default)]
    pub filter_by_language: Option<bool>,

    /// See [`Settings::show_snippets`]
    #[serde(default)]
    pub show_snippets: Option<bool>,
}
