//! Convert command definition

mod handler;

pub use handler::handle_convert_command;

use std::path::PathBuf;

use clap::Args;

/// Arguments for the convert command
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input .xlsx files exported from the MOMO back office
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Directory to write CSV files into (default: each input's directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Skip the UTF-8 BOM prefix on output files
    #[arg(long)]
    pub no_bom: bool,

    /// Print a JSON summary of all file outcomes to stdout
    #[arg(long)]
    pub json: bool,
}
