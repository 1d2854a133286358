use super::RunOptions;

pub struct Languages;

impl Languages {
    pub fn execute(options: &RunOptions<'_>) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing languages command");
        }

        let (_, catalog) = options.load_catalog()?;

        if catalog.is_empty() {
            println!("No snippets found");
            return Ok(());
        }

        for (language, entries) in catalog.iter() {
            let name = if language.is_empty() { "(none)" } else { language };
            println!("{name}\t{}", entries.len());
        }

        Ok(())
    }
}
