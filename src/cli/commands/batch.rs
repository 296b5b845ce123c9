//! `batch` command

use anyhow::{Context, Result};
use colored::*;
use std::time::Instant;

use super::shared::create_progress_bar;
use crate::cli::args::BatchArgs;
use crate::processor::BatchDriver;

pub fn run_batch(args: &BatchArgs, show_progress: bool) -> Result<()> {
    let config = args.to_config();

    println!(
        "{}",
        "Starting B-deck batch conversion".bright_green().bold()
    );
    println!(
        "  {} {}",
        "Input:".bright_cyan(),
        config.input_dir.display()
    );
    println!(
        "  {} {}",
        "Output:".bright_cyan(),
        config.converter.output_dir.display()
    );

    let driver = BatchDriver::new(config).context("Invalid batch options")?;
    let start = Instant::now();

    let pb = show_progress.then(|| create_progress_bar("converting"));
    let stats = driver
        .run(pb.as_ref())
        .with_context(|| format!("Batch conversion of {} failed", args.input_dir.display()))?;

    stats.print_summary();
    println!(
        "  {} {:.2}s",
        "Time elapsed:".bright_cyan(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
