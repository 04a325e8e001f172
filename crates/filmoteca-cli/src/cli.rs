//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Browse, rate and discuss movies.
#[derive(Parser, Debug)]
#[command(name = "filmoteca")]
#[command(author, version = env!("FILMOTECA_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Base URL of the API
    #[arg(long, env = "FILMOTECA_API", default_value = "http://localhost:8080", global = true)]
    pub api: String,

    /// Session file (defaults to the user data directory)
    #[arg(long, env = "FILMOTECA_SESSION", global = true)]
    pub session_file: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}
