//! JTWC B-deck best-track handling
//!
//! ## Architecture
//!
//! - [`parser`] - CSV rows to [`RawTrackRow`](crate::models::RawTrackRow)
//! - [`aggregator`] - One record per synoptic time from multi-threshold rows
//! - [`system_code`] - JTWC to HURDAT2 intensity code mapping
//! - [`identity`] - Storm identifier and display name resolution

pub mod aggregator;
pub mod identity;
pub mod parser;
pub mod system_code;

#[cfg(test)]
pub mod tests;

pub use aggregator::{aggregate, sort_chronologically};
pub use identity::StormIdentityResolver;
pub use parser::{BdeckReader, BdeckReadStats};
pub use system_code::map_system_code;
