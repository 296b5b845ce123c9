//! B-deck to HURDAT2 conversion pipeline
//!
//! ## Architecture
//!
//! - [`convert`] - One input file to one HURDAT2 track file
//! - [`discovery`] - Input globbing, duplicate collapsing and product lookup
//! - [`batch`] - Directory runs with skip-existing and per-file isolation

pub mod batch;
pub mod convert;
pub mod discovery;

#[cfg(test)]
pub mod tests;

pub use batch::{BatchDriver, BatchStats};
pub use convert::{ConversionDriver, ConversionOutcome};
pub use discovery::{discover_bdeck_inputs, find_existing_product, list_track_files};
