//! `status` and `antimeridian` commands

use anyhow::{Context, Result};
use colored::*;

use crate::analysis::{count_directory, find_crossing_tracks};
use crate::cli::args::DirectoryArgs;
use crate::hurdat2::Hurdat2Reader;

pub fn run_status(args: &DirectoryArgs) -> Result<()> {
    let reader = Hurdat2Reader::new(args.reader_config());
    let counts = count_directory(&args.dir, &reader)
        .with_context(|| format!("Cannot count status codes in {}", args.dir.display()))?;

    print!("{}", counts.render());
    Ok(())
}

pub fn run_antimeridian(args: &DirectoryArgs) -> Result<()> {
    let reader = Hurdat2Reader::new(args.reader_config());
    let crossing = find_crossing_tracks(&args.dir, &reader)
        .with_context(|| format!("Cannot scan tracks in {}", args.dir.display()))?;

    if crossing.is_empty() {
        println!("No tracks cross the antimeridian.");
        return Ok(());
    }

    for path in &crossing {
        println!("{}", path.display());
    }
    println!(
        "{} {}",
        "Tracks crossing the antimeridian:".bright_cyan(),
        crossing.len().to_string().bright_white().bold()
    );
    Ok(())
}
