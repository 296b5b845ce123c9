//! Antimeridian crossing detection

use std::path::{Path, PathBuf};
use tracing::debug;

use super::read_tracks;
use crate::constants::ANTIMERIDIAN_LON_THRESHOLD;
use crate::error::Result;
use crate::hurdat2::Hurdat2Reader;

/// True when the longitudes hold a negative value, a non-negative value and
/// at least one value beyond ±170°.
pub fn crosses_antimeridian(longitudes: &[f64]) -> bool {
    let has_west = longitudes.iter().any(|&lon| lon < 0.0);
    let has_east = longitudes.iter().any(|&lon| lon >= 0.0);
    let near_dateline = longitudes
        .iter()
        .any(|&lon| lon.abs() > ANTIMERIDIAN_LON_THRESHOLD);

    has_west && has_east && near_dateline
}

/// Every readable `*.txt` track in `dir` whose longitudes cross the antimeridian
pub fn find_crossing_tracks(dir: &Path, reader: &Hurdat2Reader) -> Result<Vec<PathBuf>> {
    let mut crossing = Vec::new();

    for (file, result) in read_tracks(dir, reader)? {
        let longitudes: Vec<f64> = result.observations.iter().map(|o| o.longitude).collect();
        if crosses_antimeridian(&longitudes) {
            debug!("{} crosses the antimeridian", file.display());
            crossing.push(file);
        }
    }

    Ok(crossing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_crossing_track() {
        assert!(crosses_antimeridian(&[-179.5, 179.8]));
        assert!(crosses_antimeridian(&[175.0, 178.2, -178.9]));
    }

    #[test]
    fn test_non_crossing_tracks() {
        assert!(!crosses_antimeridian(&[-150.0, -10.0]));
        // Greenwich crossing, nowhere near the dateline
        assert!(!crosses_antimeridian(&[-5.0, 3.0]));
        // Close to the dateline but one-sided
        assert!(!crosses_antimeridian(&[171.0, 179.9]));
        assert!(!crosses_antimeridian(&[]));
    }

    #[test]
    fn test_find_crossing_tracks() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("SH032015_UNNAMED_2.txt"),
            "SH032015,            UNNAMED,      2,\n\
             20150701, 0000,  , LO,  5.2S, 178.1W,  25, 1004,\n\
             20150701, 0600,  , TD,  5.5S, 179.5E,  30, 1002,\n",
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("AL012000_ALPHA_1.txt"),
            "AL012000,              ALPHA,      1,\n\
             20000601, 0000,  , TD, 20.0N,  80.0W,  30, 1008,\n",
        )
        .unwrap();

        let found = find_crossing_tracks(temp_dir.path(), &Hurdat2Reader::default()).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("SH032015_UNNAMED_2.txt"));
    }

    #[test]
    fn test_unreadable_file_does_not_stop_the_scan() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("AL012000_ELISE_1.txt"),
            b"AL012000,              \xC9LISE,      1,\n",
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("SH032015_UNNAMED_2.txt"),
            "SH032015,            UNNAMED,      2,\n\
             20150701, 0000,  , LO,  5.2S, 178.1W,  25, 1004,\n\
             20150701, 0600,  , TD,  5.5S, 179.5E,  30, 1002,\n",
        )
        .unwrap();

        let found = find_crossing_tracks(temp_dir.path(), &Hurdat2Reader::default()).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("SH032015_UNNAMED_2.txt"));
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = find_crossing_tracks(&temp_dir.path().join("absent"), &Hurdat2Reader::default());
        assert!(matches!(result, Err(TrackError::DirectoryNotFound { .. })));
    }
}
