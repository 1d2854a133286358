//! Integration tests for the settings module

use std::fs;
use tempfile::TempDir;

use super::{ConfigManager, Settings};

#[test]
fn test_full_settings_workflow() {
    let tmp = TempDir::new().unwrap();
    let config_file = tmp.path().join("config.toml");

    fs::write(
        &config_file,
        r#"
backup_folder = "~/Dropbox/SnippetsLab"
search_snippets_by_notes = true
search_snippets_by_tags = false
filter_by_language = true
show_snippets = false
"#,
    )
    .unwrap();

    let settings = ConfigManager::load(Some(&config_file)).unwrap();

    assert_eq!(settings.backup_folder, "~/Dropbox/SnippetsLab");
    assert!(settings.search_snippets_by_notes);
    assert!(!settings.search_snippets_by_tags);
    assert!(settings.filter_by_language);
    assert!(!settings.show_snippets);
}

#[test]
fn test_invalid_settings_validation() {
    let tmp = TempDir::new().unwrap();
    let config_file = tmp.path().join("config.toml");
    fs::write(&config_file, r#"backup_folder = """#).unwrap();

    let result = ConfigManager::load(Some(&config_file));

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("cannot be empty"));
}

#[test]
fn test_unknown_key_rejected() {
    let tmp = TempDir::new().unwrap();
    let config_file = tmp.path().join("config.toml");
    fs::write(&config_file, "backupFolder = \"/x\"").unwrap();

    let result = ConfigManager::load(Some(&config_file));

    assert!(result.is_err());
}

#[test]
fn test_defaults_are_valid() {
    assert_eq!(ConfigManager::defaults().unwrap(), Settings::default());
}
