//! Interactive selection of catalog entries

use anyhow::{Context, Result};
use dialoguer::Select;
use snipdex::DisplayEntry;

/// Terminal picker over a list of entries
pub struct EntryPicker<'a> {
    entries: Vec<&'a DisplayEntry>,
}

impl<'a> EntryPicker<'a> {
    /// Create a picker over `entries`, shown in the given order
    #[must_use]
    pub const fn new(entries: Vec<&'a DisplayEntry>) -> Self {
        Self { entries }
    }

    /// Show the picker; `None` when the user cancels
    ///
    /// # Errors
    ///
    /// Returns an error if terminal interaction fails.
    pub fn pick(&self) -> Result<Option<&'a DisplayEntry>> {
        let items: Vec<String> = self.entries.iter().map(|e| Self::describe(e)).collect();

        let selection = Select::new()
            .with_prompt("Pick a snippet (Esc to cancel)")
            .items(&items)
            .default(0)
            .interact_opt()
            .context("Failed to show snippet picker")?;

        Ok(selection.map(|index| self.entries[index]))
    }

    /// One-line label shown in the picker
    fn describe(entry: &DisplayEntry) -> String {
        match (entry.description.is_empty(), entry.detail.is_empty()) {
            (true, true) => entry.label.clone(),
            (false, true) => format!("{}  ({})", entry.label, entry.description),
            (true, false) => format!("{}  | {}", entry.label, entry.detail),
            (false, false) => format!(
                "{}  ({})  | {}",
                entry.label, entry.description, entry.detail
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(description: &str, detail: &str) -> DisplayEntry {
        DisplayEntry {
            label: "Connect".to_string(),
            content: "connect()".to_string(),
            detail: detail.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_describe_label_only() {
        assert_eq!(EntryPicker::describe(&entry("", "")), "Connect");
    }

    #[test]
    fn test_describe_with_description_and_detail() {
        assert_eq!(
            EntryPicker::describe(&entry("#db - Fragment", "uses pgx")),
            "Connect  (#db - Fragment)  | uses pgx"
        );
    }

    #[test]
    fn test_describe_with_detail_only() {
        assert_eq!(
            EntryPicker::describe(&entry("", "uses pgx")),
            "Connect  | uses pgx"
        );
    }
}
