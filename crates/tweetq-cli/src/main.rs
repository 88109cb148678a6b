//! # tweetq CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tweetq_cli::languages::{run_languages, LanguagesArgs};
use tweetq_cli::search::{run_search, SearchArgs};

/// Search tweets from the command line.
///
/// Parameters are validated locally before any request is made. The API
/// token is read from `TWEETQ_BEARER_TOKEN`.
#[derive(Parser, Debug)]
#[command(name = "tweetq", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate search parameters and run (or preview) a search.
    Search(SearchArgs),

    /// List language codes accepted by `search --lang`.
    Languages(LanguagesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "tweetq starting");

    let result = match cli.command {
        Commands::Search(args) => run_search(&args),
        Commands::Languages(args) => run_languages(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
