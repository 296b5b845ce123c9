//! End-to-end tests over a temporary B-deck archive
//!
//! Converts a small directory of B-deck files, then runs the HURDAT2 reader,
//! status counter and antimeridian finder over the products.

use besttrack_processor::analysis::{count_directory, find_crossing_tracks};
use besttrack_processor::config::{BatchConfig, ConverterConfig, ReaderConfig};
use besttrack_processor::hurdat2::Hurdat2Reader;
use besttrack_processor::processor::BatchDriver;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BABS_BDECK: &str = "\
WP, 19, 1998101800,   , BEST,   0,  118N, 1398E,  20, 1006, TD,   0, NEQ,    0,    0,    0,    0,
WP, 19, 1998101812,   , BEST,   0,  125N, 1385E,  35, 1000, TS,  34, NEQ,   60,   60,   45,   50, 1008,  150,  30,   0,   0,   W,   0,   ,   0,   0,       BABS,
WP, 19, 1998101812,   , BEST,   0,  125N, 1385E,  35, 1000, TS,  50, NEQ,   20,   20,   15,   15, 1008,  150,  30,   0,   0,   W,   0,   ,   0,   0,       BABS,
WP, 19, 1998101900,   , BEST,   0,  140N, 1370E,  70,  970, TY,  64, NEQ,   25,   20,   20,   20, 1008,  150,  30,   0,   0,   W,   0,   ,   0,   0,       BABS,
";

const DATELINE_BDECK: &str = "\
SH, 03, 2015070100,   , BEST,   0,   52S, 1781W,  25, 1004,   ,   0, NEQ,    0,    0,    0,    0, 1008,  150,  30,   0,   0,   W,   0,   ,   0,   0,     INVEST,
SH, 03, 2015070106,   , BEST,   0,   55S, 1795E,  30, 1002, TD,   0, NEQ,    0,    0,    0,    0,
";

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_batch_then_analyse() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("bdeck");
    let output_dir = temp_dir.path().join("single_TC");
    fs::create_dir_all(&input_dir).unwrap();

    write(&input_dir, "bwp191998.dat", BABS_BDECK);
    write(&input_dir, "bwp191998.txt", "garbage");
    write(&input_dir, "bsh032015.txt", DATELINE_BDECK);

    let config = BatchConfig::new(
        &input_dir,
        ConverterConfig::default().with_output_dir(&output_dir),
    );
    let stats = BatchDriver::new(config).unwrap().run(None).unwrap();
    assert_eq!(stats.unique_storms, 2);
    assert_eq!(stats.success, 2);
    assert_eq!(stats.errors, 0);

    let babs = output_dir.join("WP191998_BABS_3.txt");
    let unnamed = output_dir.join("SH032015_UNNAMED_2.txt");
    assert!(babs.exists());
    assert!(unnamed.exists());

    // The reader parses the converter's output back
    let reader = Hurdat2Reader::new(ReaderConfig::default());
    let result = reader.read_file(&babs).unwrap();
    assert_eq!(result.stats.lines_skipped(), 0);
    assert_eq!(result.observations.len(), 3);
    assert_eq!(result.header.as_ref().unwrap().name, "BABS");

    let statuses: Vec<&str> = result
        .observations
        .iter()
        .map(|o| o.status.as_str())
        .collect();
    assert_eq!(statuses, vec!["TD", "TS", "HU"]);

    let fix = &result.observations[1];
    assert_eq!(fix.latitude, 12.5);
    assert_eq!(fix.longitude, 138.5);
    assert_eq!(fix.max_wind, Some(35));
    let radii = fix.radii.unwrap();
    assert_eq!(radii.r34, [60, 60, 45, 50]);
    assert_eq!(radii.r50, [20, 20, 15, 15]);
    assert_eq!(fix.max_wind_radius, None);

    let counts = count_directory(&output_dir, &reader).unwrap();
    assert_eq!(counts.total(), 5);
    assert_eq!(counts.get("TD"), Some(2));
    assert!(counts.render().ends_with("Total : 5\n"));

    let crossing = find_crossing_tracks(&output_dir, &reader).unwrap();
    assert_eq!(crossing, vec![unnamed]);
}

#[test]
fn test_missing_directory_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let reader = Hurdat2Reader::default();
    let missing = temp_dir.path().join("single_TC");

    let err = count_directory(&missing, &reader).unwrap_err();
    assert!(err.to_string().contains("not found"));
    assert!(find_crossing_tracks(&missing, &reader).is_err());
}
