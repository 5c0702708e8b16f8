//! Command-line interface definitions

pub mod commands;

use clap::{Parser, Subcommand};

/// Convert MOMO back-office order exports into Omni ERP import CSVs
#[derive(Parser, Debug)]
#[command(name = "momoconv-cli", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert one or more .xlsx exports to ERP import CSV files
    Convert(commands::convert::ConvertArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
