use super::RunOptions;
use super::common::{print_entry, search_options};
use crate::cli::MatchScope;

pub struct Search;

impl Search {
    pub fn execute(
        query: &[String],
        scope: &MatchScope,
        options: &RunOptions<'_>,
    ) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing search command");
            println!("Query: {query:?}");
        }

        let (settings, catalog) = options.load_catalog()?;
        let search = search_options(scope, &settings);

        let found = catalog.search(&query.join(" "), &search);
        if found.is_empty() {
            println!("No matching snippets");
            return Ok(());
        }

        for entry in found {
            print_entry(entry, settings.show_snippets);
        }

        Ok(())
    }
}
