//! Configuration management and validation.
//!
//! The converter variants that historically existed side by side differ
//! only in how they resolve storm identity and in the widths of a few
//! fixed-width fields. Those choices live here as explicit settings.

use crate::constants::{
    BANNED_STORM_NAMES, COMPACT_COUNT_FIELD_WIDTH, COMPACT_NAME_FIELD_WIDTH, DEFAULT_OUTPUT_DIR,
    DEFAULT_PREFERRED_EXTENSIONS, DEFAULT_RADIUS_FIELD_WIDTH, WIDE_COUNT_FIELD_WIDTH,
    WIDE_NAME_FIELD_WIDTH,
};
use crate::error::{Result, TrackError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the basin/number/year of a storm is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum IdentityStrategy {
    /// Parse `b<basin><number><year>` from the input file name
    Filename,
    /// Use the first three columns of the first data row
    Row,
}

/// Header field-width conventions found in HURDAT2 producers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum HeaderWidths {
    /// 19-wide name, 7-wide record count (NHC archive layout)
    Wide,
    /// 20-wide name, 5-wide record count
    Compact,
}

impl HeaderWidths {
    /// (name width, count width)
    pub fn widths(self) -> (usize, usize) {
        match self {
            HeaderWidths::Wide => (WIDE_NAME_FIELD_WIDTH, WIDE_COUNT_FIELD_WIDTH),
            HeaderWidths::Compact => (COMPACT_NAME_FIELD_WIDTH, COMPACT_COUNT_FIELD_WIDTH),
        }
    }
}

/// HURDAT2 reader settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Attach the 31-value auxiliary profile to 52-field lines
    pub extended: bool,
}

impl ReaderConfig {
    pub fn with_extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }
}

/// B-deck to HURDAT2 converter settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    pub identity_strategy: IdentityStrategy,

    /// Width the storm name is right-justified to in the header
    pub name_field_width: usize,

    /// Width the record count is right-justified to in the header
    pub count_field_width: usize,

    /// Width of each wind-radius value in data lines
    pub radius_field_width: usize,

    /// Directory that converted tracks are written into
    pub output_dir: PathBuf,

    /// Names that are skipped when resolving the storm's display name
    pub banned_names: Vec<String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        let (name_field_width, count_field_width) = HeaderWidths::Wide.widths();
        Self {
            identity_strategy: IdentityStrategy::Filename,
            name_field_width,
            count_field_width,
            radius_field_width: DEFAULT_RADIUS_FIELD_WIDTH,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            banned_names: BANNED_STORM_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ConverterConfig {
    pub fn with_identity_strategy(mut self, strategy: IdentityStrategy) -> Self {
        self.identity_strategy = strategy;
        self
    }

    /// Apply one of the known header layouts
    pub fn with_header_widths(mut self, widths: HeaderWidths) -> Self {
        let (name, count) = widths.widths();
        self.name_field_width = name;
        self.count_field_width = count;
        self
    }

    pub fn with_radius_field_width(mut self, width: usize) -> Self {
        self.radius_field_width = width;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.name_field_width == 0 || self.count_field_width == 0 {
            return Err(TrackError::configuration(
                "header field widths must be greater than zero",
            ));
        }
        if self.radius_field_width == 0 {
            return Err(TrackError::configuration(
                "radius field width must be greater than zero",
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(TrackError::configuration("output directory is empty"));
        }
        Ok(())
    }
}

/// Directory batch conversion settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Directory scanned for `b*.dat` / `b*.txt` inputs
    pub input_dir: PathBuf,

    /// Extensions (without dot) ranked by preference for duplicate storms
    pub preferred_extensions: Vec<String>,

    pub converter: ConverterConfig,
}

impl BatchConfig {
    pub fn new(input_dir: impl Into<PathBuf>, converter: ConverterConfig) -> Self {
        Self {
            input_dir: input_dir.into(),
            preferred_extensions: DEFAULT_PREFERRED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            converter,
        }
    }

    pub fn with_preferred_extensions(mut self, extensions: Vec<String>) -> Self {
        self.preferred_extensions = extensions;
        self
    }

    /// Rank of an extension; unknown extensions sort after every listed one
    pub fn extension_rank(&self, extension: &str) -> usize {
        self.preferred_extensions
            .iter()
            .position(|e| e.eq_ignore_ascii_case(extension))
            .unwrap_or(self.preferred_extensions.len())
    }

    pub fn validate(&self) -> Result<()> {
        if self.preferred_extensions.is_empty() {
            return Err(TrackError::configuration(
                "at least one input extension is required",
            ));
        }
        self.converter.validate()
    }
}
