use super::RunOptions;
use super::common::print_entry;

pub struct List;

impl List {
    pub fn execute(language: Option<&str>, options: &RunOptions<'_>) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing list command");
            println!("Language: {language:?}");
        }

        let (settings, catalog) = options.load_catalog()?;

        match language {
            Some(language) => {
                let Some(entries) = catalog.get(language) else {
                    anyhow::bail!("No snippets for language '{language}'");
                };
                for entry in entries {
                    print_entry(entry, settings.show_snippets);
                }
            }
            None => {
                for (language, entries) in catalog.iter() {
                    println!("[{language}]");
                    for entry in entries {
                        print_entry(entry, settings.show_snippets);
                    }
                }
            }
        }

        Ok(())
    }
}
