use anyhow::Context;
use snipdex::config::{ConfigDiscovery, ConfigFiles};

use super::RunOptions;

pub struct Config;

impl Config {
    pub fn execute(options: &RunOptions<'_>) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing config command");
        }

        if options.no_config {
            println!("# Settings files ignored (--no-config)");
        } else {
            let files = ConfigDiscovery::discover(options.config_path)?;
            Self::print_sources(&files);
        }

        let settings = options.load_settings()?;
        let rendered = toml::to_string_pretty(&settings).context("Failed to render settings")?;
        print!("{rendered}");

        Ok(())
    }

    fn print_sources(files: &ConfigFiles) {
        let mut any = false;
        for path in files.in_merge_order() {
            println!("# Loaded: {}", path.display());
            any = true;
        }
        if !any {
            println!("# No settings files found, using defaults");
        }
    }
}
