//! `library.json` loading

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{CatalogError, Result};
use crate::model::{Library, LibraryDocument};

/// Read and deserialize a SnippetsLab library file.
///
/// The `contents` envelope is unwrapped. Every call reads the file again.
///
/// # Errors
///
/// Returns [`CatalogError::LibraryNotFound`] if the file does not exist,
/// [`CatalogError::Filesystem`] if it cannot be read, and
/// [`CatalogError::Parse`] if it is not JSON of the expected shape.
pub fn load_library(library_path: impl AsRef<Path>) -> Result<Library> {
    let path = library_path.as_ref();

    if !path.exists() {
        return Err(CatalogError::not_found(path));
    }

    let text = fs::read_to_string(path).map_err(|e| CatalogError::filesystem(path, e))?;

    let document: LibraryDocument =
        serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let library = document.contents;
    debug!(
        "Loaded {} snippets and {} tags from {}",
        library.snippets.len(),
        library.tags.len(),
        path.display()
    );

    Ok(library)
}
