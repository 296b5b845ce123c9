//! Command implementations for the `besttrack` CLI
//!
//! Each subcommand lives in its own module:
//! - `convert`: single B-deck file conversion
//! - `batch`: directory conversion with progress and summary
//! - `analysis`: status code counting and antimeridian detection
//! - `read`: observation table of one HURDAT2 file

pub mod analysis;
pub mod batch;
pub mod convert;
pub mod read;
pub mod shared;

use anyhow::Result;

use crate::cli::args::{Args, Commands};

/// Dispatch to the selected subcommand
pub fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args)?;

    match &args.command {
        Commands::Convert(convert_args) => convert::run_convert(convert_args),
        Commands::Batch(batch_args) => batch::run_batch(batch_args, args.show_progress()),
        Commands::Status(dir_args) => analysis::run_status(dir_args),
        Commands::Antimeridian(dir_args) => analysis::run_antimeridian(dir_args),
        Commands::Read(read_args) => read::run_read(read_args),
    }
}
