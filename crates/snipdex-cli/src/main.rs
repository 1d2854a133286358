mod cli;
mod commands;
mod interactive;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use commands::RunOptions;
use env_logger::{Builder, Env};

fn init_logger(verbose: bool) {
    // RUST_LOG wins; otherwise warnings only, or debug with --verbose
    let default_filter = if verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .init();
}

fn main() -> anyhow::Result<()> {
    // Set up Ctrl+C handler for graceful interruption
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C)");
        std::process::exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    let cli = Cli::parse();
    init_logger(cli.verbose);

    if cli.verbose {
        println!("Verbose mode enabled");
    }

    let options = RunOptions::new(
        cli.verbose,
        cli.config.as_deref(),
        cli.no_config,
        cli.backup_folder.as_deref(),
    );

    match &cli.command {
        Commands::Languages => {
            commands::Languages::execute(&options)
                .context("Failed to execute languages command")?;
        }
        Commands::List { language } => {
            commands::List::execute(language.as_deref(), &options)
                .context("Failed to execute list command")?;
        }
        Commands::Search { query, scope } => {
            commands::Search::execute(query, scope, &options)
                .context("Failed to execute search command")?;
        }
        Commands::Pick { query, scope } => {
            commands::Pick::execute(query, scope, &options)
                .context("Failed to execute pick command")?;
        }
        Commands::Export { language, format } => {
            commands::Export::execute(language.as_deref(), *format, &options)
                .context("Failed to execute export command")?;
        }
        Commands::Config => {
            commands::Config::execute(&options).context("Failed to execute config command")?;
        }
    }

    Ok(())
}
