//! awsenv CLI entry point.

use clap::Parser;

use awsenv::cli::{handle_error, Cli, Commands};
use awsenv::infrastructure::config::ConfigLoader;
use awsenv::infrastructure::logging::LoggerImpl;

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => handle_error(err, cli.json),
    };

    let _logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => logger,
        Err(err) => handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Resolve(args) => awsenv::cli::commands::resolve::execute(args, &config, cli.json),
        Commands::Export(args) => awsenv::cli::commands::export::execute(args, &config, cli.json),
        Commands::Inspect(args) => awsenv::cli::commands::inspect::execute(args, &config, cli.json),
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}
