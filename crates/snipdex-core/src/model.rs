//! Library document types
//!
//! Deserialization is lenient: absent or `null` fields fall back to empty
//! values so any syntactically valid library builds a catalog. Unknown fields
//! are ignored.

use serde::{Deserialize, Deserializer};

/// Title SnippetsLab gives a fragment the user never renamed
pub const PLACEHOLDER_FRAGMENT_TITLE: &str = "Fragment";

/// User-defined label; identity is the `uuid`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Tag {
    /// Tag identifier referenced by snippets
    #[serde(default, deserialize_with = "null_as_default")]
    pub uuid: String,
    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
}

/// One block of insertable code text
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Fragment {
    /// Fragment title, `"Fragment"` unless renamed
    #[serde(default = "placeholder_title", deserialize_with = "null_as_placeholder")]
    pub title: String,
    /// Free-form note shown alongside the entry
    #[serde(default, deserialize_with = "null_as_default")]
    pub note: String,
    /// Text inserted when the entry is chosen
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// Lexer name supplied by SnippetsLab, e.g. `PythonLexer`
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
}

impl Default for Fragment {
    fn default() -> Self {
        Self {
            title: placeholder_title(),
            note: String::new(),
            content: String::new(),
            language: String::new(),
        }
    }
}

fn placeholder_title() -> String {
    PLACEHOLDER_FRAGMENT_TITLE.to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_placeholder<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(placeholder_title))
}

/// A titled, tagged group of fragments
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Snippet {
    /// Snippet title, shared by every entry built from it
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Tag uuids
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Fragments in the order the user arranged them
    #[serde(default, deserialize_with = "null_as_default")]
    pub fragments: Vec<Fragment>,
}

/// Root of a SnippetsLab library
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Library {
    /// All snippets in the library
    #[serde(default, deserialize_with = "null_as_default")]
    pub snippets: Vec<Snippet>,
    /// All tags known to the library
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
}

/// On-disk envelope: `{ "contents": { "snippets": [...], "tags": [...] } }`
#[derive(Debug, Deserialize)]
pub(crate) struct LibraryDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub contents: Library,
}
