use anyhow::Result;
use clap::Parser;

use momoconv_cli::cli::commands::convert::handle_convert_command;
use momoconv_cli::cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Convert(args) => handle_convert_command(args),
    }
}
