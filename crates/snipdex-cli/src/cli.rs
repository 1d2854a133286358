use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Browse SnippetsLab backups by language
///
/// Reads the newest *.snippetslab-backup snapshot and indexes every fragment under its language
#[derive(Parser, Debug)]
#[command(name = "snipdex")]
#[command(about, long_about = None, version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the backup folder from the settings files
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "SNIPDEX_BACKUP_FOLDER"
    )]
    pub backup_folder: Option<PathBuf>,

    /// Use specific settings file
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore all settings files
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List language buckets with their entry counts
    Languages,

    /// List entries, optionally for one language
    List {
        /// Language bucket to list (e.g. python, PythonLexer)
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Search entries by title, notes, or tags
    Search {
        /// Search terms; every term must match
        #[arg(required = true)]
        query: Vec<String>,

        #[command(flatten)]
        scope: MatchScope,
    },

    /// Interactively pick an entry and print its content
    Pick {
        /// Optional search terms to narrow the choices
        query: Vec<String>,

        #[command(flatten)]
        scope: MatchScope,
    },

    /// Print the catalog as JSON
    Export {
        /// Only export one language bucket
        #[arg(short, long)]
        language: Option<String>,

        /// Output layout
        #[arg(long, value_enum, default_value = "pretty")]
        format: ExportFormat,
    },

    /// Show active settings and where they came from
    Config,
}

/// Flags shared by `search` and `pick`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct MatchScope {
    /// Language of the document being edited
    #[arg(short, long)]
    pub language: Option<String>,

    /// Restrict to --language even if filter_by_language is off
    #[arg(long, requires = "language")]
    pub filter_by_language: bool,

    /// Also match fragment notes
    #[arg(long)]
    pub notes: bool,

    /// Also match tags and fragment titles
    #[arg(long)]
    pub tags: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// Indented JSON
    Pretty,
    /// Single-line JSON
    Compact,
}
