//! Query matching over a finished catalog

use super::{Catalog, DisplayEntry, bucket_key};

/// Which entries a query sees and which fields it matches against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Restrict matching to one language bucket
    language: Option<String>,
    /// Also match against the fragment note
    match_notes: bool,
    /// Also match against the tag/fragment description
    match_tags: bool,
}

impl SearchOptions {
    /// Match labels only, across every language
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a single language bucket
    #[must_use]
    pub fn with_language(mut self, language: impl AsRef<str>) -> Self {
        self.language = Some(bucket_key(language.as_ref()));
        self
    }

    /// Also match fragment notes
    #[must_use]
    pub const fn with_notes(mut self, enabled: bool) -> Self {
        self.match_notes = enabled;
        self
    }

    /// Also match tags and fragment titles
    #[must_use]
    pub const fn with_tags(mut self, enabled: bool) -> Self {
        self.match_tags = enabled;
        self
    }

    /// Normalized language restriction, if any
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    fn matches(&self, entry: &DisplayEntry, terms: &[String]) -> bool {
        terms.iter().all(|term| {
            contains_ignore_case(&entry.label, term)
                || (self.match_notes && contains_ignore_case(&entry.detail, term))
                || (self.match_tags && contains_ignore_case(&entry.description, term))
        })
    }
}

fn contains_ignore_case(haystack: &str, lowered_term: &str) -> bool {
    haystack.to_lowercase().contains(lowered_term)
}

impl Catalog {
    /// Entries matching every whitespace-separated term of `query`.
    ///
    /// Matching is case-insensitive. An empty query returns every entry in scope.
    #[must_use]
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<&DisplayEntry> {
        let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();

        let scope: Box<dyn Iterator<Item = &DisplayEntry> + '_> = match options.language() {
            Some(language) => Box::new(self.get(language).unwrap_or_default().iter()),
            None => Box::new(self.entries()),
        };

        scope
            .filter(|entry| options.matches(entry, &terms))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_catalog;
    use crate::model::{Fragment, Snippet, Tag};
    use crate::tags::TagIndex;

    fn sample_catalog() -> Catalog {
        let index = TagIndex::build(&[Tag {
            uuid: "DB".to_string(),
            title: "database".to_string(),
        }]);

        let snippets = vec![
            Snippet {
                title: "Connect to Postgres".to_string(),
                tags: vec!["DB".to_string()],
                fragments: vec![
                    Fragment {
                        title: "Fragment".to_string(),
                        note: "uses psycopg".to_string(),
                        content: "psycopg.connect()".to_string(),
                        language: "PythonLexer".to_string(),
                    },
                    Fragment {
                        title: "Fragment".to_string(),
                        note: "uses pgx".to_string(),
                        content: "pgx.Connect()".to_string(),
                        language: "GoLexer".to_string(),
                    },
                ],
            },
            Snippet {
                title: "Read a file".to_string(),
                tags: vec![],
                fragments: vec![Fragment {
                    title: "Fragment".to_string(),
                    note: "pathlib variant".to_string(),
                    content: "Path(p).read_text()".to_string(),
                    language: "PythonLexer".to_string(),
                }],
            },
        ];

        build_catalog(&snippets, &index)
    }

    fn labels<'a>(entries: &[&'a DisplayEntry]) -> Vec<&'a str> {
        entries.iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let catalog = sample_catalog();

        assert_eq!(catalog.search("", &SearchOptions::new()).len(), 3);
    }

    #[test]
    fn test_label_match_is_case_insensitive() {
        let catalog = sample_catalog();

        let found = catalog.search("POSTGRES", &SearchOptions::new());

        assert_eq!(
            labels(&found),
            vec!["Connect to Postgres", "Connect to Postgres"]
        );
    }

    #[test]
    fn test_language_restriction() {
        let catalog = sample_catalog();
        let options = SearchOptions::new().with_language("PythonLexer");

        assert_eq!(options.language(), Some("python"));
        assert_eq!(catalog.search("", &options).len(), 2);
        assert_eq!(catalog.search("connect", &options).len(), 1);
    }

    #[test]
    fn test_unknown_language_matches_nothing() {
        let catalog = sample_catalog();
        let options = SearchOptions::new().with_language("cobol");

        assert!(catalog.search("", &options).is_empty());
    }

    #[test]
    fn test_notes_only_match_when_enabled() {
        let catalog = sample_catalog();

        assert!(catalog.search("pathlib", &SearchOptions::new()).is_empty());

        let found = catalog.search("pathlib", &SearchOptions::new().with_notes(true));
        assert_eq!(labels(&found), vec!["Read a file"]);
    }

    #[test]
    fn test_tags_only_match_when_enabled() {
        let catalog = sample_catalog();

        assert!(catalog.search("#database", &SearchOptions::new()).is_empty());

        let found = catalog.search("#database", &SearchOptions::new().with_tags(true));
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_all_terms_must_match() {
        let catalog = sample_catalog();
        let options = SearchOptions::new().with_notes(true);

        let found = catalog.search("connect pgx", &options);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].content, "pgx.Connect()");
    }
}
