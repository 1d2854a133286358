use anyhow::Context;

use super::RunOptions;
use crate::cli::ExportFormat;

pub struct Export;

impl Export {
    pub fn execute(
        language: Option<&str>,
        format: ExportFormat,
        options: &RunOptions<'_>,
    ) -> anyhow::Result<()> {
        let (_, catalog) = options.load_catalog()?;

        let json = match language {
            Some(language) => {
                let entries = catalog.get(language).unwrap_or_default();
                Self::render(&entries, format)
            }
            None => Self::render(&catalog, format),
        }
        .context("Failed to serialize catalog")?;

        println!("{json}");
        Ok(())
    }

    fn render<T: serde::Serialize + ?Sized>(
        value: &T,
        format: ExportFormat,
    ) -> serde_json::Result<String> {
        match format {
            ExportFormat::Pretty => serde_json::to_string_pretty(value),
            ExportFormat::Compact => serde_json::to_string(value),
        }
    }
}
