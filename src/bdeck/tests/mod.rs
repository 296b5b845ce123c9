//! Test fixtures for B-deck parsing, aggregation and conversion

use std::path::{Path, PathBuf};


/// One B-deck line in JTWC column layout
#[allow(clippy::too_many_arguments)]
pub fn bdeck_line(
    timestamp: &str,
    lat: &str,
    lon: &str,
    vmax: &str,
    mslp: &str,
    system: &str,
    threshold: &str,
    radii: [&str; 4],
    name: &str,
) -> String {
    format!(
        "WP, 19, {},   , BEST,   0, {:>5}, {:>5}, {:>3}, {:>4}, {}, {:>3}, NEQ, {:>4}, {:>4}, {:>4}, {:>4}, 1008,  150,  30,   0,   0,   W,   0,   ,   0,   0, {:>10},",
        timestamp, lat, lon, vmax, mslp, system, threshold, radii[0], radii[1], radii[2], radii[3], name
    )
}

/// Out-of-order B-deck track with repeated thresholds and junk rows
pub fn create_test_bdeck() -> String {
    [
        bdeck_line("1998101812", "125N", "1385E", "35", "1000", "TS", "34", ["60", "60", "45", "50"], "BABS"),
        bdeck_line("1998101800", "118N", "1398E", "20", "1006", "TD", "0", ["0", "0", "0", "0"], "INVEST"),
        bdeck_line("1998101812", "126N", "1384E", "40", "998", "TS", "50", ["20", "20", "15", "15"], "BABS"),
        "WP, 19".to_string(),
        bdeck_line("1998101900", "140N", "1370E", "70", "970", "TY", "64", ["25", "20", "20", "x"], "BABS"),
        bdeck_line("19981019", "140N", "1370E", "70", "970", "TY", "34", ["1", "1", "1", "1"], "BOGUS"),
        bdeck_line("1998101812", "127N", "1383E", "45", "995", "TS", "34", ["70", "70", "50", "55"], "BABS"),
        bdeck_line("1998101906", "152N", "1362E", "", "-999", "", "", ["", "", "", ""], "TRANSITIONED"),
        String::new(),
    ]
    .join("\n")
}

/// B-deck track whose only names are placeholders
pub fn create_unnamed_bdeck() -> String {
    [
        bdeck_line("2015070100", "52S", "1781W", "25", "1004", "", "", ["", "", "", ""], "INVEST"),
        bdeck_line("2015070106", "55S", "1795E", "30", "1002", "TD", "", ["", "", "", ""], ""),
    ]
    .join("\n")
}

/// Write `content` to `dir/name` and return the path
pub fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
