//! Newest-snapshot discovery
//!
//! SnippetsLab writes one `<timestamp>.snippetslab-backup/` folder per backup
//! directly inside the backup folder. Only direct children are inspected.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::debug;

use crate::error::{CatalogError, Result};

/// Name suffix of a snapshot folder
pub const SNAPSHOT_SUFFIX: &str = "snippetslab-backup";

/// Library file stored inside each snapshot
pub const LIBRARY_FILE_NAME: &str = "library.json";

/// Find the `library.json` of the most recently modified snapshot under `root_dir`.
///
/// A leading `~` is expanded to the home directory first. Equal modification
/// times go to the snapshot seen last during the scan.
///
/// # Errors
///
/// Returns [`CatalogError::Filesystem`] if `root_dir` does not exist, is not a
/// directory, or holds a snapshot whose modification time cannot be read.
/// Returns [`CatalogError::LibraryNotFound`] if no snapshot matches or the
/// chosen snapshot has no `library.json`.
pub fn locate_latest_library(root_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let root = expand_tilde(root_dir.as_ref());

    let entries = fs::read_dir(&root).map_err(|e| CatalogError::filesystem(&root, e))?;

    let mut latest: Option<(PathBuf, SystemTime)> = None;

    for entry in entries {
        let entry = entry.map_err(|e| CatalogError::filesystem(&root, e))?;

        if !entry
            .file_name()
            .to_string_lossy()
            .ends_with(SNAPSHOT_SUFFIX)
        {
            continue;
        }

        let path = entry.path();
        let modified = fs::metadata(&path)
            .and_then(|m| m.modified())
            .map_err(|e| CatalogError::filesystem(&path, e))?;

        debug!("Found snapshot {}", path.display());

        if latest
            .as_ref()
            .is_none_or(|(_, newest)| modified >= *newest)
        {
            latest = Some((path, modified));
        }
    }

    let library_path = match latest {
        Some((snapshot, _)) => {
            debug!("Selected snapshot {}", snapshot.display());
            snapshot.join(LIBRARY_FILE_NAME)
        }
        None => {
            debug!("No snapshot found in {}", root.display());
            root.join(format!("*{SNAPSHOT_SUFFIX}"))
                .join(LIBRARY_FILE_NAME)
        }
    };

    if !library_path.exists() {
        return Err(CatalogError::not_found(library_path));
    }

    Ok(library_path)
}

/// Expand a leading `~` to the current user's home directory.
///
/// Paths without the shorthand, or `~user` forms, are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
