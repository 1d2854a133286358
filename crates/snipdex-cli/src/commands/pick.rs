use std::io::{IsTerminal, Write};

use anyhow::Context;
use log::debug;

use super::RunOptions;
use super::common::search_options;
use crate::cli::MatchScope;
use crate::interactive::EntryPicker;

pub struct Pick;

impl Pick {
    pub fn execute(
        query: &[String],
        scope: &MatchScope,
        options: &RunOptions<'_>,
    ) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing pick command");
            println!("Query: {query:?}");
        }

        let (settings, catalog) = options.load_catalog()?;
        let search = search_options(scope, &settings);

        let candidates = catalog.search(&query.join(" "), &search);
        if candidates.is_empty() {
            eprintln!("No matching snippets");
            return Ok(());
        }

        if !std::io::stderr().is_terminal() {
            anyhow::bail!("pick needs an interactive terminal; use `search` instead");
        }

        let total = candidates.len();
        let Some(entry) = EntryPicker::new(candidates).pick()? else {
            eprintln!("Selection cancelled.");
            return Ok(());
        };

        debug!("Picked '{}' out of {total} candidates", entry.label);

        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(entry.content.as_bytes())
            .and_then(|()| stdout.flush())
            .context("Failed to write snippet")?;

        Ok(())
    }
}
