//! HURDAT2 track file reader
//!
//! Parses a single-storm HURDAT2 file into observations. The first line is
//! the storm header; every following non-blank line is one observation.
//! Damaged lines are skipped and classified rather than failing the file.

use std::path::Path;
use tracing::{debug, info, warn};

use super::header::TrackHeader;
use super::stats::{ReadResult, ReadStats, SkipReason};
use crate::config::ReaderConfig;
use crate::constants::{
    HURDAT2_EXTENDED_FIELDS, HURDAT2_MIN_FIELDS, HURDAT2_PROFILE_START, HURDAT2_RADII_END,
};
use crate::coords::{self, CoordMode};
use crate::error::{Result, TrackError};
use crate::field_parsers::{
    FieldValue, parse_integer, parse_measurement, parse_profile_value, parse_timestamp,
};
use crate::models::{AuxProfile, Observation, WindRadii};

/// HURDAT2 reader
#[derive(Debug, Clone, Default)]
pub struct Hurdat2Reader {
    config: ReaderConfig,
}

impl Hurdat2Reader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read and parse a HURDAT2 file
    pub fn read_file(&self, file_path: &Path) -> Result<ReadResult> {
        debug!("Reading HURDAT2 file: {}", file_path.display());

        let content =
            std::fs::read_to_string(file_path).map_err(|e| TrackError::io(file_path, e))?;
        let result = self.parse_str(&content);

        info!(
            "Parsed {} observations from {} lines in {}",
            result.stats.observations_parsed,
            result.stats.total_lines,
            file_path.display()
        );

        Ok(result)
    }

    /// Parse HURDAT2 content already held in memory
    pub fn parse_str(&self, content: &str) -> ReadResult {
        let mut lines = content.lines();
        let header = lines.next().and_then(TrackHeader::parse);

        let mut stats = ReadStats::new();
        let mut observations = Vec::new();

        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            stats.total_lines += 1;

            match self.parse_line(line, &mut stats) {
                Ok(observation) => {
                    observations.push(observation);
                    stats.observations_parsed += 1;
                }
                Err(reason) => {
                    match reason {
                        SkipReason::TooFewFields => {
                            warn!("Skipping malformed line: {}", line.trim());
                            stats.warnings.push(line.trim().to_string());
                        }
                        SkipReason::InvalidTimestamp | SkipReason::InvalidCoordinate => {
                            debug!("Dropped line ({:?}): {}", reason, line.trim());
                        }
                    }
                    stats.record_skip(reason);
                }
            }
        }

        // Consumers rely on chronological order even when the file is shuffled
        observations.sort_by_key(|o| o.timestamp);

        ReadResult {
            header,
            observations,
            stats,
        }
    }

    /// Parse one data line into an observation
    fn parse_line(
        &self,
        line: &str,
        stats: &mut ReadStats,
    ) -> std::result::Result<Observation, SkipReason> {
        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() < HURDAT2_MIN_FIELDS {
            return Err(SkipReason::TooFewFields);
        }

        let timestamp = parse_timestamp(parts[0], parts[1]).ok_or(SkipReason::InvalidTimestamp)?;

        let latitude =
            coords::decode(parts[4], CoordMode::Degrees).ok_or(SkipReason::InvalidCoordinate)?;
        let longitude =
            coords::decode(parts[5], CoordMode::Degrees).ok_or(SkipReason::InvalidCoordinate)?;

        let max_wind = count_coerced(parse_measurement(parts[6]), stats);
        let min_pressure = count_coerced(parse_measurement(parts[7]), stats);

        let radii = (parts.len() >= HURDAT2_RADII_END).then(|| parse_radii(&parts[8..20], stats));
        let max_wind_radius = parts
            .get(HURDAT2_RADII_END)
            .and_then(|raw| count_coerced(parse_measurement(raw), stats));

        let profile = if self.config.extended && parts.len() == HURDAT2_EXTENDED_FIELDS {
            let values = parts[HURDAT2_PROFILE_START..]
                .iter()
                .map(|raw| count_coerced(parse_profile_value(raw), stats))
                .collect();
            AuxProfile::new(values)
        } else {
            None
        };

        Ok(Observation {
            timestamp,
            record_id: Some(parts[2]).filter(|s| !s.is_empty()).map(String::from),
            status: parts[3].to_string(),
            latitude,
            longitude,
            max_wind,
            min_pressure,
            radii,
            max_wind_radius,
            profile,
        })
    }
}

/// Unwrap a field, counting non-numeric text
fn count_coerced<T>(field: FieldValue<T>, stats: &mut ReadStats) -> Option<T> {
    if field.is_invalid() {
        stats.fields_coerced += 1;
    }
    field.value
}

fn parse_radii(fields: &[&str], stats: &mut ReadStats) -> WindRadii {
    let mut values = [0i32; 12];
    for (slot, raw) in values.iter_mut().zip(fields) {
        let field = parse_integer(raw);
        if field.is_invalid() {
            stats.fields_coerced += 1;
        }
        *slot = field.or(0);
    }

    let quadrants = |start: usize| [
        values[start],
        values[start + 1],
        values[start + 2],
        values[start + 3],
    ];
    WindRadii {
        r34: quadrants(0),
        r50: quadrants(4),
        r64: quadrants(8),
    }
}
