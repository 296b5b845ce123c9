//! File discovery for B-deck inputs and HURDAT2 products
//!
//! B-deck archives often hold the same storm twice (`bwp191998.txt` and
//! `bwp191998.dat`). Inputs are collapsed by file stem, keeping the
//! extension ranked first in the batch configuration, so the chosen file
//! never depends on directory listing order.

use crate::config::BatchConfig;
use crate::constants::HURDAT2_EXTENSION;
use crate::error::{Result, TrackError};
use glob::{Pattern, glob};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Discover `b*.<ext>` inputs, one path per storm stem, sorted by stem
pub fn discover_bdeck_inputs(config: &BatchConfig) -> Result<Vec<PathBuf>> {
    let input_dir = &config.input_dir;
    if !input_dir.is_dir() {
        return Err(TrackError::DirectoryNotFound {
            path: input_dir.clone(),
        });
    }

    let mut by_stem: BTreeMap<String, (usize, PathBuf)> = BTreeMap::new();

    for extension in &config.preferred_extensions {
        let pattern = format!(
            "{}/b*.{}",
            Pattern::escape(&input_dir.to_string_lossy()),
            extension
        );

        for path in glob(&pattern)?.filter_map(|entry| entry.ok()) {
            if !path.is_file() {
                continue;
            }
            let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().to_string())
            else {
                continue;
            };
            let rank = config.extension_rank(extension);

            match by_stem.get(&stem) {
                Some((existing_rank, existing)) if *existing_rank <= rank => {
                    debug!(
                        "Ignoring {} in favour of {}",
                        path.display(),
                        existing.display()
                    );
                }
                _ => {
                    by_stem.insert(stem, (rank, path));
                }
            }
        }
    }

    Ok(by_stem.into_values().map(|(_, path)| path).collect())
}

/// Product prefix for a B-deck stem: `bwp191998` becomes `WP191998`
pub fn product_prefix(stem: &str) -> String {
    stem.strip_prefix(['b', 'B']).unwrap_or(stem).to_uppercase()
}

/// First existing `<prefix>*.txt` product in `output_dir`, if any
pub fn find_existing_product(output_dir: &Path, prefix: &str) -> Result<Option<PathBuf>> {
    let pattern = format!(
        "{}/{}*.{}",
        Pattern::escape(&output_dir.to_string_lossy()),
        Pattern::escape(prefix),
        HURDAT2_EXTENSION
    );

    let mut matches: Vec<PathBuf> = glob(&pattern)?.filter_map(|entry| entry.ok()).collect();
    matches.sort();
    Ok(matches.into_iter().next())
}

/// All `*.txt` HURDAT2 track files in a directory, sorted by path
pub fn list_track_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(TrackError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let pattern = format!(
        "{}/*.{}",
        Pattern::escape(&dir.to_string_lossy()),
        HURDAT2_EXTENSION
    );
    let mut files: Vec<PathBuf> = glob(&pattern)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    debug!("Found {} track files in {}", files.len(), dir.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConverterConfig;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "test data").unwrap();
    }

    #[test]
    fn test_dat_preferred_over_txt() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "bwp191998.txt");
        touch(temp_dir.path(), "bwp191998.dat");
        touch(temp_dir.path(), "bsh032015.txt");
        touch(temp_dir.path(), "notes.txt");
        touch(temp_dir.path(), "bio012001.csv");

        let config = BatchConfig::new(temp_dir.path(), ConverterConfig::default());
        let files = discover_bdeck_inputs(&config).unwrap();

        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["bsh032015.txt", "bwp191998.dat"]);
    }

    #[test]
    fn test_preference_order_is_configurable() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "bwp191998.txt");
        touch(temp_dir.path(), "bwp191998.dat");

        let config = BatchConfig::new(temp_dir.path(), ConverterConfig::default())
            .with_preferred_extensions(vec!["txt".to_string(), "dat".to_string()]);
        let files = discover_bdeck_inputs(&config).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("bwp191998.txt"));
    }

    #[test]
    fn test_missing_input_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        let config = BatchConfig::new(&missing, ConverterConfig::default());

        match discover_bdeck_inputs(&config).unwrap_err() {
            TrackError::DirectoryNotFound { path } => assert_eq!(path, missing),
            other => panic!("Expected DirectoryNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_product_prefix() {
        assert_eq!(product_prefix("bwp191998"), "WP191998");
        assert_eq!(product_prefix("BSH032015"), "SH032015");
    }

    #[test]
    fn test_find_existing_product() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "WP191998_BABS_32.txt");

        let found = find_existing_product(temp_dir.path(), "WP191998").unwrap();
        assert!(found.unwrap().ends_with("WP191998_BABS_32.txt"));
        assert!(find_existing_product(temp_dir.path(), "WP201998").unwrap().is_none());
        assert!(
            find_existing_product(&temp_dir.path().join("absent"), "WP191998")
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_list_track_files_sorted() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "WP191998_BABS_32.txt");
        touch(temp_dir.path(), "AL122003_HENRI_22.txt");
        touch(temp_dir.path(), "readme.md");

        let files = list_track_files(temp_dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("AL122003_HENRI_22.txt"));
    }
}
