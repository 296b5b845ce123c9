//! B-deck CSV row parsing
//!
//! B-deck files are comma separated with space padding and a variable
//! number of columns. Rows too short to carry a `YYYYMMDDHH` timestamp are
//! dropped; every other missing trailing column reads as blank.

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::constants::{BDECK_MIN_FIELDS, TIMESTAMP_KEY_LEN, bdeck_columns as col};
use crate::error::{Result, TrackError};
use crate::field_parsers::{FieldValue, parse_integer, parse_measurement};
use crate::models::{RawTrackRow, ThresholdClass};

/// Row-level statistics for one B-deck file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BdeckReadStats {
    pub total_rows: usize,
    pub rows_kept: usize,

    /// Too few columns or a timestamp shorter than ten characters
    pub rows_dropped: usize,

    /// Records the CSV layer could not decode
    pub csv_errors: usize,

    /// Numeric fields that were present but unparseable
    pub fields_coerced: usize,
}

/// B-deck file reader
#[derive(Debug, Clone, Default)]
pub struct BdeckReader;

impl BdeckReader {
    pub fn new() -> Self {
        Self
    }

    /// Read all usable rows of a B-deck file, in file order
    pub fn read_file(&self, path: &Path) -> Result<(Vec<RawTrackRow>, BdeckReadStats)> {
        let file = std::fs::File::open(path).map_err(|e| TrackError::io(path, e))?;
        let (rows, stats) = self.read_from(file).map_err(|source| TrackError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "Read {} of {} B-deck rows from {}",
            stats.rows_kept,
            stats.total_rows,
            path.display()
        );
        Ok((rows, stats))
    }

    /// Read rows from any byte source.
    ///
    /// Undecodable records are counted and skipped; only an I/O failure of
    /// the source aborts the read.
    pub fn read_from<R: Read>(
        &self,
        source: R,
    ) -> std::result::Result<(Vec<RawTrackRow>, BdeckReadStats), csv::Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(source);

        let mut stats = BdeckReadStats::default();
        let mut rows = Vec::new();

        for result in reader.records() {
            stats.total_rows += 1;
            match result {
                Ok(record) => match parse_row(&record, &mut stats) {
                    Some(row) => {
                        rows.push(row);
                        stats.rows_kept += 1;
                    }
                    None => stats.rows_dropped += 1,
                },
                Err(e) if e.is_io_error() => return Err(e),
                Err(e) => {
                    stats.csv_errors += 1;
                    debug!("CSV error at row {}: {}", stats.total_rows, e);
                }
            }
        }

        Ok((rows, stats))
    }
}

/// Build a row from a CSV record; `None` when it has no usable timestamp
/// (fewer than ten leading ASCII characters)
pub fn parse_row(record: &StringRecord, stats: &mut BdeckReadStats) -> Option<RawTrackRow> {
    let fields: Vec<&str> = record.iter().map(str::trim).collect();
    parse_fields(&fields, stats)
}

/// Build a row from already split fields
pub fn parse_fields(fields: &[&str], stats: &mut BdeckReadStats) -> Option<RawTrackRow> {
    if fields.len() < BDECK_MIN_FIELDS {
        return None;
    }
    // The aggregation key is sliced by byte offset, so it must be ASCII
    let timestamp = fields[col::TIMESTAMP];
    if !timestamp
        .get(..TIMESTAMP_KEY_LEN)
        .is_some_and(|key| key.is_ascii())
    {
        return None;
    }

    let field = |index: usize| fields.get(index).copied().unwrap_or("");

    let max_wind = coerce(parse_measurement(field(col::MAX_WIND)), stats);
    let min_pressure = coerce(parse_measurement(field(col::MIN_PRESSURE)), stats);
    let mut quadrant_radii = [0i32; 4];
    for (quadrant, radius) in quadrant_radii.iter_mut().enumerate() {
        *radius = coerce(parse_integer(field(col::RADII_START + quadrant)), stats).unwrap_or(0);
    }

    Some(RawTrackRow {
        basin: field(col::BASIN).to_uppercase(),
        number: field(col::NUMBER).to_string(),
        timestamp: timestamp.to_string(),
        latitude_raw: field(col::LATITUDE).to_string(),
        longitude_raw: field(col::LONGITUDE).to_string(),
        max_wind,
        min_pressure,
        system_code: field(col::SYSTEM_CODE).to_string(),
        threshold: ThresholdClass::from_field(field(col::THRESHOLD)),
        quadrant_radii,
        name: field(col::STORM_NAME).to_uppercase(),
    })
}

fn coerce(parsed: FieldValue<i32>, stats: &mut BdeckReadStats) -> Option<i32> {
    if parsed.is_invalid() {
        stats.fields_coerced += 1;
    }
    parsed.value
}
