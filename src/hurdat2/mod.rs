//! HURDAT2 track file reading and writing
//!
//! ## Architecture
//!
//! - [`reader`] - Line-oriented parser producing time-ordered observations
//! - [`header`] - Storm header line (`id, name, count`)
//! - [`writer`] - Fixed-width serialisation of track records
//! - [`stats`] - Read statistics and skip classification
//!
//! ## Usage
//!
//! ```rust
//! use besttrack_processor::config::ReaderConfig;
//! use besttrack_processor::hurdat2::Hurdat2Reader;
//!
//! let content = "AL122003,              HENRI,      2,\n\
//!                20030906, 0000,  , TD, 28.0N,  85.1W,  30, 1010,\n\
//!                20030905, 1800,  , LO, 27.6N,  85.6W,  25, 1011,\n";
//! let result = Hurdat2Reader::new(ReaderConfig::default()).parse_str(content);
//! assert_eq!(result.observations.len(), 2);
//! assert_eq!(result.observations[0].status, "LO");
//! ```

pub mod header;
pub mod reader;
pub mod stats;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use header::TrackHeader;
pub use reader::Hurdat2Reader;
pub use stats::{ReadResult, ReadStats, SkipReason};
pub use writer::{Hurdat2Writer, HurdatRecord};
