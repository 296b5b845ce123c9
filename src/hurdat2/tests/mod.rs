//! Test fixtures for HURDAT2 reader and writer testing

use std::io::Write;
use tempfile::NamedTempFile;


/// A short, well-formed Atlantic track with radii and a landfall record
pub fn create_test_track() -> String {
    r#"AL122003,              HENRI,      5,
20030903, 1800,  , TD, 26.4N,  86.6W,  30, 1011,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, -999,
20030904, 0000,  , TD, 26.8N,  86.2W,  30, 1010,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, -999,
20030905, 1200,  , TS, 27.4N,  85.5W,  50, 1000,   60,   60,    0,   40,    0,    0,    0,    0,    0,    0,    0,    0,   30,
20030906, 0930, L, TS, 28.0N,  83.0W,  40, 1005,   60,   30,    0,   30,    0,    0,    0,    0,    0,    0,    0,    0, -999,
20030908, 0000,  , EX, 35.1N,  75.3W,  25, -999,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, -999,"#
        .to_string()
}

/// Same kind of track with shuffled lines, damaged lines and blank lines
pub fn create_damaged_track() -> String {
    r#"EP052015,             DOLORES,      7,
20150713, 1200,  , HU, 18.4N, 105.4W,  90,  969,
20150711, 1800,  , TS, 15.9N, 101.2W,  40, 1002,

20150712, 0000,  , TS,
2015XX12, 0600,  , TS, 16.6N, 102.7W,  45,  999,
20150712, 1200,  , TS, 17.0N, 999.9W,  55,  992,
20150712, 1800,  , HU, 17.5N, 104.1W, abc, -999,
20150712, 06,  , TS, 16.5N, 102.9W,  45,  998,"#
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
