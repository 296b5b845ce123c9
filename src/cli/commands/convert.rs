//! `convert` command

use anyhow::{Context, Result};
use colored::*;

use crate::cli::args::ConvertArgs;
use crate::processor::{ConversionDriver, ConversionOutcome};

pub fn run_convert(args: &ConvertArgs) -> Result<()> {
    let driver = ConversionDriver::new(args.converter.to_config())
        .context("Invalid converter options")?;

    let outcome = driver
        .convert_file(&args.input)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    match outcome {
        ConversionOutcome::Converted {
            output_path,
            identity,
            record_count,
        } => {
            println!(
                "{} {} ({}, {} records)",
                "Wrote".bright_green().bold(),
                output_path.display().to_string().bright_white(),
                identity.name.bright_cyan(),
                record_count
            );
        }
        ConversionOutcome::NoData => {
            println!(
                "{} {}",
                "No data in".bright_yellow(),
                args.input.display()
            );
        }
    }

    Ok(())
}
