//! digidb CLI - browse the Digimon Story database CSV exports.

mod cli;
mod commands;
mod database;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use database::Database;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = Database::load(&cli.data_dir)
        .map_err(Box::<dyn std::error::Error>::from)
        .and_then(|db| match cli.command {
            Commands::List { table, format } => commands::list::run(&db, table, format, cli.verbose),

            Commands::Moves { name, format } => {
                commands::moves::run(&db, &name, format, cli.verbose)
            }

            Commands::Show { name, json } => commands::show::run(&db, &name, json, cli.verbose),
        });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
