use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for catalog building
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Failures that abort a catalog build
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backup root (or the library file) could not be read
    #[error("Cannot read {}: {source}", path.display())]
    Filesystem {
        /// Path that was being accessed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// No snapshot holds a `library.json`
    #[error("No library.json found: {}", path.display())]
    LibraryNotFound {
        /// Library path that was attempted
        path: PathBuf,
    },

    /// The library file is not JSON of the expected shape
    #[error("Failed to parse library {}: {source}", path.display())]
    Parse {
        /// Library file that failed to decode
        path: PathBuf,
        /// Underlying decode failure
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::LibraryNotFound { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_path() {
        let err = CatalogError::not_found("/backups/x.snippetslab-backup/library.json");
        assert_eq!(
            err.to_string(),
            "No library.json found: /backups/x.snippetslab-backup/library.json"
        );
    }

    #[test]
    fn test_filesystem_error_keeps_source() {
        let err = CatalogError::filesystem(
            "/missing",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("/missing"));
    }
}
