//! mediashelf CLI
//!
//! Command-line interface for loading a media-title catalog and running
//! aggregate queries over it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use mediashelf_catalog::{LoadOptions, ParseErrorPolicy};

mod commands;
mod error;
mod settings;

#[derive(Parser)]
#[command(name = "mediashelf")]
#[command(about = "Load a media-title catalog and answer aggregate queries", long_about = None)]
struct Cli {
    /// Catalog CSV file (defaults to the saved path, then ./titles.csv)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Abort the load on the first malformed row instead of skipping it
    #[arg(long, global = true)]
    strict: bool,

    /// What to do with a release year that fails to parse
    #[arg(long, value_enum, default_value_t = YearPolicy::DefaultToZero, global = true)]
    on_parse_error: YearPolicy,

    #[command(subcommand)]
    command: Commands,
}

/// CLI mirror of [`ParseErrorPolicy`].
#[derive(Clone, Copy, ValueEnum)]
enum YearPolicy {
    /// Keep the row with the year set to 0 (unknown)
    DefaultToZero,
    /// Drop the row
    SkipRow,
}

impl From<YearPolicy> for ParseErrorPolicy {
    fn from(value: YearPolicy) -> Self {
        match value {
            YearPolicy::DefaultToZero => Self::DefaultToZero,
            YearPolicy::SkipRow => Self::SkipRow,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show load statistics for the catalog
    Stats,

    /// Show the country with the most titles
    Country,

    /// List each title with its release-to-addition day delta
    Deltas,

    /// List titles ordered by the date they were added
    Sort {
        /// Newest first instead of oldest first
        #[arg(short, long)]
        descending: bool,
    },

    /// Look up a single title by identifier
    Lookup {
        /// Identifier to look up (e.g. s1)
        id: String,

        /// Print the full record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the current settings
    Show,

    /// Print the settings file path
    Path,

    /// Save a default catalog file path
    SetCatalog {
        /// Catalog CSV file to use when --file is not given
        file: PathBuf,
    },

    /// Clear the saved catalog file path
    Clear,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let load_options = LoadOptions {
        strict: cli.strict,
        on_parse_error: cli.on_parse_error.into(),
    };

    let result = match cli.command {
        Commands::Stats => commands::stats::run_stats(cli.file, &load_options),
        Commands::Country => commands::country::run_country(cli.file, &load_options),
        Commands::Deltas => commands::deltas::run_deltas(cli.file, &load_options),
        Commands::Sort { descending } => {
            commands::sort::run_sort(cli.file, &load_options, descending)
        }
        Commands::Lookup { id, json } => {
            commands::lookup::run_lookup(cli.file, &load_options, &id, json)
        }
        Commands::Config { action } => commands::config::run_config(action),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
