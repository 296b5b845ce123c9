//! Directory batch conversion with per-file error isolation

use colored::*;
use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

use super::convert::{ConversionDriver, ConversionOutcome};
use super::discovery::{discover_bdeck_inputs, find_existing_product, product_prefix};
use crate::config::BatchConfig;
use crate::error::{Result, TrackError};

/// Per-run batch counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Inputs left after collapsing duplicate stems
    pub unique_storms: usize,
    pub success: usize,

    /// Inputs whose product already existed in the output directory
    pub skipped: usize,
    pub no_data: usize,
    pub errors: usize,

    pub no_data_files: Vec<PathBuf>,
    pub error_files: Vec<(PathBuf, String)>,
    pub written: Vec<PathBuf>,
}

impl BatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inputs accounted for by any outcome
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.no_data + self.errors
    }

    /// Fraction of attempted conversions that succeeded
    pub fn success_rate(&self) -> f64 {
        let attempted = self.success + self.no_data + self.errors;
        if attempted == 0 {
            0.0
        } else {
            (self.success as f64 / attempted as f64) * 100.0
        }
    }

    pub fn print_summary(&self) {
        println!("\n{}", "Batch Summary".bright_green().bold());
        println!(
            "  {} {}",
            "Unique storms:".bright_cyan(),
            self.unique_storms.to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Converted:".bright_cyan(),
            self.success.to_string().bright_white()
        );
        for path in &self.written {
            println!("    {}", path.display());
        }
        println!(
            "  {} {}",
            "Skipped (existing):".bright_cyan(),
            self.skipped.to_string().bright_white()
        );
        if self.no_data > 0 {
            println!(
                "  {} {}",
                "No data:".bright_yellow(),
                self.no_data.to_string().bright_yellow()
            );
            for path in &self.no_data_files {
                println!("    {}", path.display());
            }
        }
        if self.errors > 0 {
            println!(
                "  {} {:.1}%",
                "Success rate:".bright_cyan(),
                self.success_rate()
            );
            println!(
                "  {} {}",
                "Errors:".bright_red(),
                self.errors.to_string().bright_red().bold()
            );
            for (path, message) in &self.error_files {
                println!("    {}: {}", path.display(), message);
            }
        }
    }
}

/// Converts every B-deck storm in a directory
#[derive(Debug, Clone)]
pub struct BatchDriver {
    config: BatchConfig,
}

impl BatchDriver {
    pub fn new(config: BatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Discover, skip already converted storms and convert the rest.
    ///
    /// A failure on one file is counted and logged; the batch continues.
    /// The already-converted check looks for `<STEM without b>*.txt` from
    /// the input file name, before any row is read. With
    /// [`IdentityStrategy::Row`](crate::config::IdentityStrategy::Row) it
    /// only finds earlier products whose row identity matches that stem.
    pub fn run(&self, progress: Option<&ProgressBar>) -> Result<BatchStats> {
        let inputs = discover_bdeck_inputs(&self.config)?;
        if inputs.is_empty() {
            return Err(TrackError::NoInputFiles {
                path: self.config.input_dir.clone(),
            });
        }

        let driver = ConversionDriver::new(self.config.converter.clone())?;
        let output_dir = &self.config.converter.output_dir;

        let mut stats = BatchStats::new();
        stats.unique_storms = inputs.len();
        info!(
            "Found {} unique storms in {}",
            inputs.len(),
            self.config.input_dir.display()
        );

        if let Some(pb) = progress {
            pb.set_length(inputs.len() as u64);
        }

        for input in &inputs {
            let stem = input
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();

            if let Some(pb) = progress {
                pb.set_message(stem.clone());
            }

            if let Some(existing) = find_existing_product(output_dir, &product_prefix(&stem))? {
                info!(
                    "Skipping {}: {} already exists",
                    input.display(),
                    existing.display()
                );
                stats.skipped += 1;
            } else {
                match driver.convert_file(input) {
                    Ok(ConversionOutcome::Converted { output_path, .. }) => {
                        stats.success += 1;
                        stats.written.push(output_path);
                    }
                    Ok(ConversionOutcome::NoData) => {
                        stats.no_data += 1;
                        stats.no_data_files.push(input.clone());
                    }
                    Err(e) => {
                        warn!("Failed to convert {}: {}", input.display(), e);
                        stats.errors += 1;
                        stats.error_files.push((input.clone(), e.to_string()));
                    }
                }
            }

            if let Some(pb) = progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = progress {
            pb.finish_with_message("done");
        }

        info!(
            "Batch complete: {} converted, {} skipped, {} without data, {} errors",
            stats.success, stats.skipped, stats.no_data, stats.errors
        );
        Ok(stats)
    }
}
