//! Error handling for best-track conversion and analysis.
//!
//! Per-line and per-field problems are not errors: they surface as
//! classified outcomes in the reader and converter statistics. Only
//! failures that end the processing of a whole file (or a whole command)
//! are represented here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in file {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Cannot parse basin/number/year from {file}")]
    InvalidStormId { file: String },

    #[error("Directory '{path}' not found")]
    DirectoryNotFound { path: PathBuf },

    #[error("No b*.txt / b*.dat files found in {path}")]
    NoInputFiles { path: PathBuf },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl TrackError {
    /// Wrap an I/O failure with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackError>;
