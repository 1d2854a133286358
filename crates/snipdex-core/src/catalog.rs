//! Language-indexed catalog of display entries
//!
//! Every fragment of every non-private snippet becomes one [`DisplayEntry`],
//! filed under the normalized form of the fragment's lexer name:
//! - keys are lowercase and never contain `"lexer"`
//! - entries keep the order snippets and fragments appear in the library
//! - entries are never merged, even when two fragments share content

mod search;

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

pub use search::SearchOptions;

use crate::model::{PLACEHOLDER_FRAGMENT_TITLE, Snippet};
use crate::tags::{TagIndex, convert_tags};

/// Tag name that keeps a snippet out of the catalog
pub const IGNORE_TAG: &str = "vscode-ignore";

/// Marker stripped from lexer names when building bucket keys
pub const LEXER_MARKER: &str = "lexer";

/// One selectable entry built from a single fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEntry {
    /// Snippet title
    pub label: String,
    /// Fragment content, inserted when the entry is chosen
    pub content: String,
    /// Fragment note
    pub detail: String,
    /// Tags and fragment title, e.g. `#Tag1, #Tag2 - Fragment 1`
    pub description: String,
}

/// Mapping from language key to entries, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    buckets: IndexMap<String, Vec<DisplayEntry>>,
}

impl Catalog {
    /// Entries for `language`; the argument is normalized with [`bucket_key`]
    #[must_use]
    pub fn get(&self, language: &str) -> Option<&[DisplayEntry]> {
        self.buckets.get(&bucket_key(language)).map(Vec::as_slice)
    }

    /// Language keys in the order they were first seen
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Buckets with their entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DisplayEntry])> {
        self.buckets
            .iter()
            .map(|(language, entries)| (language.as_str(), entries.as_slice()))
    }

    /// All entries, bucket by bucket
    pub fn entries(&self) -> impl Iterator<Item = &DisplayEntry> {
        self.buckets.values().flatten()
    }

    /// Number of language buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the catalog has no buckets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of entries across all buckets
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    fn push(&mut self, language: String, entry: DisplayEntry) {
        self.buckets.entry(language).or_default().push(entry);
    }
}

/// Normalize a lexer name into a bucket key.
///
/// Lowercases, then removes every occurrence of `"lexer"`, so `PythonLexer`,
/// `python` and `PYTHONLEXER` share a bucket. Applying it twice changes nothing.
#[must_use]
pub fn bucket_key(language: &str) -> String {
    let mut key = language.to_lowercase();
    while let Some(start) = key.find(LEXER_MARKER) {
        key.replace_range(start..start + LEXER_MARKER.len(), "");
    }
    key
}

/// Build the catalog from `snippets`, resolving tags through `tag_index`.
///
/// A snippet whose rendered tag list contains [`IGNORE_TAG`] contributes no
/// entries. This is a substring check on the rendered list, so a tag such as
/// `not-vscode-ignore-related` also hides the snippet.
#[must_use]
pub fn build_catalog(snippets: &[Snippet], tag_index: &TagIndex) -> Catalog {
    let mut catalog = Catalog::default();

    for snippet in snippets {
        let tag_summary = convert_tags(&snippet.tags, tag_index);

        if tag_summary.contains(IGNORE_TAG) {
            debug!("Skipping private snippet {:?}", snippet.title);
            continue;
        }

        for fragment in &snippet.fragments {
            let entry = DisplayEntry {
                label: snippet.title.clone(),
                content: fragment.content.clone(),
                detail: fragment.note.clone(),
                description: describe(&tag_summary, &fragment.title),
            };

            catalog.push(bucket_key(&fragment.language), entry);
        }
    }

    catalog
}

/// `"<tags> - <fragment title>"`, left-trimmed; empty when there is nothing
/// but the placeholder title to show.
fn describe(tag_summary: &str, fragment_title: &str) -> String {
    let description = format!("{tag_summary} - {fragment_title}");
    let description = description.trim_start();

    if description.strip_prefix("- ") == Some(PLACEHOLDER_FRAGMENT_TITLE) {
        return String::new();
    }

    description.to_string()
}
