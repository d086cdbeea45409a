//! Rendering records as a plain table, CSV or JSON.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::database::Row;

/// Print `rows` under the original header line of their table.
pub fn render<'a, T, I>(header: &str, rows: I, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>>
where
    T: Row + Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", header.yellow().bold())?;
            for row in rows {
                writeln!(out, "{}", row.cells().join(", "))?;
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        OutputFormat::Json => {
            let rows: Vec<&T> = rows.into_iter().collect();
            serde_json::to_writer_pretty(&mut out, &rows)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
