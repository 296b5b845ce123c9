//! Directory-level analysis of converted HURDAT2 tracks
//!
//! ## Architecture
//!
//! - [`status_count`] - Status code frequencies across a directory
//! - [`antimeridian`] - Tracks whose longitudes wrap across ±180°

pub mod antimeridian;
pub mod status_count;

pub use antimeridian::{crosses_antimeridian, find_crossing_tracks};
pub use status_count::{StatusCounts, count_directory};

use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::Result;
use crate::hurdat2::{Hurdat2Reader, ReadResult};
use crate::processor::list_track_files;

/// Read every `*.txt` track in `dir`, skipping files that cannot be read.
///
/// Only a missing directory is an error; an unreadable file is logged and
/// left out of the results.
fn read_tracks(dir: &Path, reader: &Hurdat2Reader) -> Result<Vec<(PathBuf, ReadResult)>> {
    let mut tracks = Vec::new();
    for file in list_track_files(dir)? {
        match reader.read_file(&file) {
            Ok(result) => tracks.push((file, result)),
            Err(e) => warn!("Skipping unreadable track file {}: {}", file.display(), e),
        }
    }
    Ok(tracks)
}
