//! # snipdex
//!
//! Core library for turning a SnippetsLab backup export into a language-indexed
//! catalog of insertable code fragments.
//!
//! The pipeline runs leaf-first and strictly forward:
//! locate the newest snapshot, parse its `library.json`, resolve tag names,
//! then index every surviving fragment under its normalized language key.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Core error types for the snipdex library
pub mod error;

/// Typed view of the SnippetsLab library document
pub mod model;

/// Newest-snapshot discovery inside a backup folder
pub mod locator;

/// `library.json` reading and deserialization
pub mod parser;

/// Tag identifier to tag name resolution
pub mod tags;

/// Language-indexed catalog of display entries
pub mod catalog;

/// Settings file discovery, merging and validation
pub mod config;

use std::path::Path;

pub use catalog::{Catalog, DisplayEntry, SearchOptions, bucket_key, build_catalog};
pub use config::{ConfigManager, Settings};
pub use error::{CatalogError, Result};
pub use locator::locate_latest_library;
pub use model::{Fragment, Library, Snippet, Tag};
pub use parser::load_library;
pub use tags::{TagIndex, convert_tags};

/// Build the snippet catalog from the newest snapshot under `backup_root`.
///
/// The first failing stage aborts the build; no partial catalog is returned.
///
/// # Errors
///
/// Returns [`CatalogError::Filesystem`] if the backup root cannot be read,
/// [`CatalogError::LibraryNotFound`] if no snapshot holds a `library.json`,
/// and [`CatalogError::Parse`] if the library is not valid JSON.
pub fn build_snippet_catalog(backup_root: impl AsRef<Path>) -> Result<Catalog> {
    let library_path = locate_latest_library(backup_root)?;
    let library = load_library(&library_path)?;

    let tag_index = TagIndex::build(&library.tags);
    let catalog = build_catalog(&library.snippets, &tag_index);

    log::info!(
        "Indexed {} entries in {} languages from {}",
        catalog.entry_count(),
        catalog.len(),
        library_path.display()
    );

    Ok(catalog)
}

/// Build the snippet catalog from the backup folder named in `settings`.
///
/// # Errors
///
/// Same as [`build_snippet_catalog`].
pub fn build_catalog_from_settings(settings: &Settings) -> Result<Catalog> {
    build_snippet_catalog(&settings.backup_folder)
}
