//! Common types and utilities for command execution

use std::path::Path;

use anyhow::Context;
use snipdex::config::ConfigValidator;
use snipdex::{Catalog, ConfigManager, DisplayEntry, SearchOptions, Settings};

use crate::cli::MatchScope;

/// Execution options shared by every command
pub struct RunOptions<'a> {
    /// Enable verbose output
    pub verbose: bool,
    /// Path to custom settings file
    pub config_path: Option<&'a Path>,
    /// Skip loading all settings files
    pub no_config: bool,
    /// Backup folder overriding the settings files
    pub backup_folder: Option<&'a Path>,
}

impl<'a> RunOptions<'a> {
    /// Create new run options
    #[must_use]
    pub const fn new(
        verbose: bool,
        config_path: Option<&'a Path>,
        no_config: bool,
        backup_folder: Option<&'a Path>,
    ) -> Self {
        Self {
            verbose,
            config_path,
            no_config,
            backup_folder,
        }
    }

    /// Resolve settings from files, defaults, and CLI overrides
    pub fn load_settings(&self) -> anyhow::Result<Settings> {
        let mut settings = if self.no_config {
            ConfigManager::defaults()?
        } else {
            ConfigManager::load(self.config_path).context("Failed to load settings")?
        };

        if let Some(folder) = self.backup_folder {
            settings.backup_folder = folder.to_string_lossy().into_owned();
            ConfigValidator::validate(&settings)?;
        }

        if self.verbose {
            println!("Backup folder: {}", settings.backup_path().display());
        }

        Ok(settings)
    }

    /// Load settings and build the catalog from the newest snapshot
    pub fn load_catalog(&self) -> anyhow::Result<(Settings, Catalog)> {
        let settings = self.load_settings()?;
        let catalog = snipdex::build_catalog_from_settings(&settings)
            .context("Failed to build snippet catalog")?;

        if self.verbose {
            println!(
                "Indexed {} entries in {} languages",
                catalog.entry_count(),
                catalog.len()
            );
        }

        Ok((settings, catalog))
    }
}

/// Translate CLI flags and settings into catalog search options
#[must_use]
pub fn search_options(scope: &MatchScope, settings: &Settings) -> SearchOptions {
    let mut options = SearchOptions::new()
        .with_notes(scope.notes || settings.search_snippets_by_notes)
        .with_tags(scope.tags || settings.search_snippets_by_tags);

    let filtering = scope.filter_by_language || settings.filter_by_language;
    if let Some(language) = scope.language.as_deref().filter(|_| filtering) {
        options = options.with_language(language);
    }

    options
}

/// Print one entry in the listing layout
pub fn print_entry(entry: &DisplayEntry, show_content: bool) {
    println!("{}", entry.label);
    if !entry.description.is_empty() {
        println!("  {}", entry.description);
    }
    if !entry.detail.is_empty() {
        println!("  {}", entry.detail);
    }
    if show_content {
        for line in entry.content.lines() {
            println!("    {line}");
        }
    }
}
