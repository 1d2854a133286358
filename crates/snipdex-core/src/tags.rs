//! Tag resolution

use std::collections::HashMap;

use crate::model::Tag;

/// Name rendered for a tag uuid the library no longer knows
pub const UNKNOWN_TAG: &str = "undefined";

/// Prefix rendered before every tag name
pub const TAG_MARKER: char = '#';

/// Read-only lookup from tag uuid to tag title
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    titles: HashMap<String, String>,
}

impl TagIndex {
    /// Build the index in one pass; a repeated uuid keeps its last title.
    #[must_use]
    pub fn build(tags: &[Tag]) -> Self {
        let titles = tags
            .iter()
            .map(|tag| (tag.uuid.clone(), tag.title.clone()))
            .collect();

        Self { titles }
    }

    /// Title for `uuid`, or [`UNKNOWN_TAG`] for dangling references
    #[must_use]
    pub fn resolve(&self, uuid: &str) -> &str {
        self.titles.get(uuid).map_or(UNKNOWN_TAG, String::as_str)
    }

    /// Title for `uuid`, if known
    #[must_use]
    pub fn get(&self, uuid: &str) -> Option<&str> {
        self.titles.get(uuid).map(String::as_str)
    }

    /// Number of distinct uuids
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Whether the index holds no tags
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// Render tag uuids as `#Title` joined with `", "`, preserving order.
///
/// An empty list renders as the empty string.
#[must_use]
pub fn convert_tags(tag_uuids: &[String], index: &TagIndex) -> String {
    tag_uuids
        .iter()
        .map(|uuid| format!("{TAG_MARKER}{}", index.resolve(uuid)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(uuid: &str, title: &str) -> Tag {
        Tag {
            uuid: uuid.to_string(),
            title: title.to_string(),
        }
    }

    fn uuids(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_build_index() {
        let index = TagIndex::build(&[tag("FAKE-UUID-1", "Tag1"), tag("FAKE-UUID-2", "Tag2")]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("FAKE-UUID-1"), Some("Tag1"));
        assert_eq!(index.get("FAKE-UUID-2"), Some("Tag2"));
    }

    #[test]
    fn test_duplicate_uuid_keeps_last_title() {
        let index = TagIndex::build(&[tag("U", "first"), tag("U", "second")]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.resolve("U"), "second");
    }

    #[test]
    fn test_empty_index() {
        let index = TagIndex::build(&[]);

        assert!(index.is_empty());
        assert_eq!(index.get("anything"), None);
    }

    #[test]
    fn test_unknown_uuid_resolves_to_placeholder() {
        let index = TagIndex::build(&[tag("FAKE-UUID-1", "Tag1")]);

        assert_eq!(index.resolve("DELETED"), "undefined");
        assert_eq!(
            convert_tags(&uuids(&["FAKE-UUID-1", "DELETED"]), &index),
            "#Tag1, #undefined"
        );
    }

    #[test]
    fn test_convert_tags() {
        let index = TagIndex::build(&[tag("FAKE-UUID-1", "Tag1"), tag("FAKE-UUID-2", "Tag2")]);

        assert_eq!(
            convert_tags(&uuids(&["FAKE-UUID-1", "FAKE-UUID-2"]), &index),
            "#Tag1, #Tag2"
        );
        assert_eq!(
            convert_tags(&uuids(&["FAKE-UUID-2", "FAKE-UUID-1"]), &index),
            "#Tag2, #Tag1"
        );
    }

    #[test]
    fn test_convert_no_tags() {
        let index = TagIndex::build(&[tag("FAKE-UUID-1", "Tag1")]);

        assert_eq!(convert_tags(&[], &index), "");
    }
}
