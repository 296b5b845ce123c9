//! `read` command

use anyhow::{Context, Result};
use colored::*;

use crate::cli::args::ReadArgs;
use crate::hurdat2::{Hurdat2Reader, Hurdat2Writer, HurdatRecord};

pub fn run_read(args: &ReadArgs) -> Result<()> {
    let reader = Hurdat2Reader::new(args.reader_config());
    let result = reader
        .read_file(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    if let Some(header) = &result.header {
        println!(
            "{} {}",
            header.storm_id.bright_green().bold(),
            header.name.bright_cyan()
        );
    }

    if result.observations.is_empty() {
        println!("No observations found.");
    } else {
        let writer = Hurdat2Writer::default();
        for observation in &result.observations {
            let line = writer.format_record(&HurdatRecord::from(observation));
            match &observation.profile {
                Some(profile) => println!("{}  [profile: {} values]", line, profile.values().len()),
                None => println!("{}", line),
            }
        }
    }

    let stats = &result.stats;
    println!(
        "{} {}/{} lines ({:.1}%)",
        "Parsed:".bright_cyan(),
        stats.observations_parsed,
        stats.total_lines,
        stats.success_rate()
    );
    if stats.lines_skipped() > 0 {
        println!(
            "  {} {} too few fields, {} bad timestamps, {} bad coordinates",
            "Skipped:".bright_yellow(),
            stats.too_few_fields,
            stats.invalid_timestamps,
            stats.invalid_coordinates
        );
    }

    Ok(())
}
