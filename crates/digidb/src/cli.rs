//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// digidb: browse the Digimon Story database CSV exports
#[derive(Parser)]
#[command(name = "digidb")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the DigiDB_*.csv files
    #[arg(short, long, global = true, default_value = "Digimon")]
    pub data_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every row of one table
    List {
        /// Table to print (digimon, moves, support)
        #[arg(value_name = "TABLE")]
        table: Table,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// List the moves that share a Digimon's attribute
    Moves {
        /// Digimon name, matched exactly
        #[arg(value_name = "NAME")]
        name: String,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show one Digimon's level 50 stats
    Show {
        /// Digimon name, matched exactly
        #[arg(value_name = "NAME")]
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// One of the three DigiDB tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Table {
    Digimon,
    Moves,
    Support,
}

impl std::str::FromStr for Table {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "digimon" | "digimonlist" => Ok(Table::Digimon),
            "moves" | "move" | "movelist" => Ok(Table::Moves),
            "support" | "supportlist" => Ok(Table::Support),
            _ => Err(format!("Unknown table: {}. Use digimon, moves, or support.", s)),
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Table::Digimon => write!(f, "digimon"),
            Table::Moves => write!(f, "moves"),
            Table::Support => write!(f, "support"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use table, csv, or json.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table() {
        assert_eq!("Moves".parse::<Table>().unwrap(), Table::Moves);
        assert_eq!("supportlist".parse::<Table>().unwrap(), Table::Support);
        assert!("items".parse::<Table>().is_err());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::default().to_string(), "table");
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_cli_parses_moves_command() {
        let cli = Cli::try_parse_from(["digidb", "--data-dir", "data", "moves", "Agumon"]).unwrap();
        assert_eq!(cli.data_dir, PathBuf::from("data"));
        assert!(matches!(cli.command, Commands::Moves { ref name, .. } if name == "Agumon"));
    }
}
