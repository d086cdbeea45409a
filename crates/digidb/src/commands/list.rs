//! List command - print every row of one table.

use crate::cli::{OutputFormat, Table};
use crate::database::Database;
use crate::output::render;

pub fn run(
    db: &Database,
    table: Table,
    format: OutputFormat,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if verbose {
        eprintln!("Listing {} table", table);
    }

    match table {
        Table::Digimon => render(&db.digimon.header, &db.digimon, format),
        Table::Moves => render(&db.moves.header, &db.moves, format),
        Table::Support => render(&db.support.header, &db.support, format),
    }
}
