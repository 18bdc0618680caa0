//! Command-line interface for awsenv.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::export::ExportArgs;
use commands::inspect::InspectArgs;
use commands::resolve::ResolveArgs;

/// Resolve AWS credentials from the local environment and export them for
/// processes that cannot see that environment.
#[derive(Parser, Debug)]
#[command(name = "awsenv", version, about)]
pub struct Cli {
    /// Emit JSON instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Settings file (defaults to .awsenv/config.yaml)
    #[arg(long, global = true, env = "AWSENV_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve credentials from the environment and shared credentials file
    Resolve(ResolveArgs),
    /// Write a configuration carrying a credential snapshot
    Export(ExportArgs),
    /// Report which credential mode a configuration file selects
    Inspect(InspectArgs),
}

/// Print an error and exit with a non-zero status.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
