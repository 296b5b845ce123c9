//! Best-track Processor Library
//!
//! A Rust library for reading HURDAT2 tropical-cyclone track files and
//! converting JTWC B-deck best tracks into the same format.
//!
//! This library provides tools for:
//! - Parsing HURDAT2 track lines into time-ordered observations
//! - Collapsing multi-threshold B-deck rows into one record per synoptic time
//! - Resolving storm identifiers and display names
//! - Writing fixed-width HURDAT2 files that the reader parses back
//! - Batch conversion, status code counts and antimeridian detection

pub mod analysis;
pub mod bdeck;
pub mod cli;
pub mod config;
pub mod constants;
pub mod coords;
pub mod error;
pub mod field_parsers;
pub mod hurdat2;
pub mod models;
pub mod processor;

pub use config::{BatchConfig, ConverterConfig, ReaderConfig};
pub use error::{Result, TrackError};
pub use hurdat2::{Hurdat2Reader, Hurdat2Writer};
pub use models::{Observation, RawTrackRow, StormIdentity};
pub use processor::{BatchDriver, ConversionDriver, ConversionOutcome};
