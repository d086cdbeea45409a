//! Moves command - list the moves available to one Digimon.

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::database::Database;
use crate::output::render;

pub fn run(
    db: &Database,
    name: &str,
    format: OutputFormat,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let digimon = db.find_digimon(name)?;
    let moves: Vec<_> = db.moves_for(digimon).collect();

    if format == OutputFormat::Table {
        println!(
            "{} {} ({} attribute)",
            "Moves for".cyan().bold(),
            digimon.digimon.white().bold(),
            digimon.attribute
        );
        if verbose {
            println!("{} matching moves", moves.len());
        }
        println!();
    }

    if moves.is_empty() && format == OutputFormat::Table {
        println!("{}", "No moves share this attribute.".yellow());
        return Ok(());
    }

    render(&db.moves.header, moves, format)
}
