//! Command-line argument definitions
//!
//! Flags map onto [`ConverterConfig`], [`BatchConfig`] and [`ReaderConfig`];
//! nothing here holds process-wide state.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{BatchConfig, ConverterConfig, HeaderWidths, IdentityStrategy, ReaderConfig};
use crate::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_RADIUS_FIELD_WIDTH};

/// Convert JTWC B-deck tracks to HURDAT2 and analyse HURDAT2 track files
#[derive(Debug, Clone, Parser)]
#[command(
    name = "besttrack",
    version,
    about = "Convert JTWC B-deck best tracks to HURDAT2 and analyse track files"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert one B-deck file to a HURDAT2 track file
    Convert(ConvertArgs),
    /// Convert every b*.dat / b*.txt storm in a directory
    Batch(BatchArgs),
    /// Count status codes across the HURDAT2 files of a directory
    Status(DirectoryArgs),
    /// List HURDAT2 files whose track crosses the antimeridian
    Antimeridian(DirectoryArgs),
    /// Print the parsed observations of one HURDAT2 file
    Read(ReadArgs),
}

/// Output layout options shared by `convert` and `batch`
#[derive(Debug, Clone, ClapArgs)]
pub struct ConverterArgs {
    /// Directory converted tracks are written into
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR
    )]
    pub output: PathBuf,

    /// Where the basin/number/year identifier comes from
    #[arg(long = "identity", value_enum, default_value = "filename")]
    pub identity: IdentityStrategy,

    /// Header name/count field widths
    #[arg(long = "header-widths", value_enum, default_value = "wide")]
    pub header_widths: HeaderWidths,

    /// Width of each wind-radius value
    #[arg(long = "radius-width", value_name = "N", default_value_t = DEFAULT_RADIUS_FIELD_WIDTH)]
    pub radius_width: usize,
}

impl ConverterArgs {
    pub fn to_config(&self) -> ConverterConfig {
        ConverterConfig::default()
            .with_identity_strategy(self.identity)
            .with_header_widths(self.header_widths)
            .with_radius_field_width(self.radius_width)
            .with_output_dir(&self.output)
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ConvertArgs {
    /// B-deck input file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub converter: ConverterArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct BatchArgs {
    /// Directory holding B-deck files
    #[arg(value_name = "DIR", default_value = ".")]
    pub input_dir: PathBuf,

    /// Extension preference for storms present in several formats
    #[arg(
        long = "prefer",
        value_name = "EXT",
        value_delimiter = ',',
        default_values_t = ["dat".to_string(), "txt".to_string()]
    )]
    pub prefer: Vec<String>,

    #[command(flatten)]
    pub converter: ConverterArgs,
}

impl BatchArgs {
    pub fn to_config(&self) -> BatchConfig {
        BatchConfig::new(&self.input_dir, self.converter.to_config())
            .with_preferred_extensions(self.prefer.clone())
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DirectoryArgs {
    /// Directory of HURDAT2 track files
    #[arg(value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub dir: PathBuf,

    /// Parse the 31-value auxiliary profile of 52-field lines
    #[arg(long)]
    pub extended: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ReadArgs {
    /// HURDAT2 track file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Parse the 31-value auxiliary profile of 52-field lines
    #[arg(long)]
    pub extended: bool,
}

impl DirectoryArgs {
    pub fn reader_config(&self) -> ReaderConfig {
        ReaderConfig::default().with_extended(self.extended)
    }
}

impl ReadArgs {
    pub fn reader_config(&self) -> ReaderConfig {
        ReaderConfig::default().with_extended(self.extended)
    }
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Progress bars are hidden in quiet mode
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
