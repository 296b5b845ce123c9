//! HURDAT2 fixed-width writer
//!
//! Serialises track records into the comma-space separated HURDAT2 layout.
//! Missing winds, pressures and radius of maximum wind are written as the
//! `-999` sentinel so the reader maps them back to absent values.

use std::path::Path;
use tracing::debug;

use crate::config::ConverterConfig;
use crate::constants::{LATITUDE_FIELD_WIDTH, LONGITUDE_FIELD_WIDTH, MISSING_SENTINEL};
use crate::coords::{self, Axis, CoordMode};
use crate::error::{Result, TrackError};
use crate::models::{AggregatedRecord, Observation, WindRadii};

/// One output line, independent of which format it came from
#[derive(Debug, Clone, PartialEq)]
pub struct HurdatRecord {
    /// `YYYYMMDD`
    pub date: String,
    /// `HHMM`
    pub time: String,
    pub record_id: Option<String>,
    pub status: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub max_wind: Option<i32>,
    pub min_pressure: Option<i32>,
    pub radii: WindRadii,
    pub max_wind_radius: Option<i32>,
}

impl HurdatRecord {
    /// Build from a B-deck aggregate keyed by `YYYYMMDDHH`; minutes become `00`
    pub fn from_aggregated(key: &str, record: &AggregatedRecord, status: &str) -> Self {
        let date = key.get(..8).unwrap_or(key);
        let hour = key.get(8..).unwrap_or("");
        Self {
            date: date.to_string(),
            time: format!("{}00", hour),
            record_id: None,
            status: status.to_string(),
            latitude: coords::decode(&record.latitude_raw, CoordMode::Tenths),
            longitude: coords::decode(&record.longitude_raw, CoordMode::Tenths),
            max_wind: record.max_wind,
            min_pressure: record.min_pressure,
            radii: record.radii,
            max_wind_radius: None,
        }
    }
}

impl From<&Observation> for HurdatRecord {
    fn from(observation: &Observation) -> Self {
        Self {
            date: observation.timestamp.format("%Y%m%d").to_string(),
            time: observation.timestamp.format("%H%M").to_string(),
            record_id: observation.record_id.clone(),
            status: observation.status.clone(),
            latitude: Some(observation.latitude),
            longitude: Some(observation.longitude),
            max_wind: observation.max_wind,
            min_pressure: observation.min_pressure,
            radii: observation.radii.unwrap_or_default(),
            max_wind_radius: observation.max_wind_radius,
        }
    }
}

/// Fixed-width HURDAT2 writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hurdat2Writer {
    name_width: usize,
    count_width: usize,
    radius_width: usize,
}

impl Default for Hurdat2Writer {
    fn default() -> Self {
        Self::from_config(&ConverterConfig::default())
    }
}

impl Hurdat2Writer {
    pub fn from_config(config: &ConverterConfig) -> Self {
        Self {
            name_width: config.name_field_width,
            count_width: config.count_field_width,
            radius_width: config.radius_field_width,
        }
    }

    /// `<id>,<name right-justified>,<count right-justified>,`
    pub fn format_header(&self, storm_id: &str, name: &str, record_count: usize) -> String {
        format!(
            "{},{:>nw$},{:>cw$},",
            storm_id,
            name,
            record_count,
            nw = self.name_width,
            cw = self.count_width
        )
    }

    /// One data line, without the trailing newline
    pub fn format_record(&self, record: &HurdatRecord) -> String {
        let mut fields = vec![
            record.date.clone(),
            record.time.clone(),
            format!("{:>1}", record.record_id.as_deref().unwrap_or(" ")),
            record.status.clone(),
            coords::encode_field(record.latitude, Axis::Latitude, LATITUDE_FIELD_WIDTH),
            coords::encode_field(record.longitude, Axis::Longitude, LONGITUDE_FIELD_WIDTH),
            format!("{:>3}", record.max_wind.unwrap_or(MISSING_SENTINEL)),
            format!("{:>4}", record.min_pressure.unwrap_or(MISSING_SENTINEL)),
        ];
        fields.extend(
            record
                .radii
                .iter()
                .map(|r| format!("{:>w$}", r, w = self.radius_width)),
        );
        fields.push(format!(
            "{:>4}",
            record.max_wind_radius.unwrap_or(MISSING_SENTINEL)
        ));

        fields.join(", ")
    }

    /// Header plus one line per record, newline terminated
    pub fn format_track(&self, storm_id: &str, name: &str, records: &[HurdatRecord]) -> String {
        let mut out = self.format_header(storm_id, name, records.len());
        out.push('\n');
        for record in records {
            out.push_str(&self.format_record(record));
            out.push('\n');
        }
        out
    }

    pub fn write_file(
        &self,
        path: &Path,
        storm_id: &str,
        name: &str,
        records: &[HurdatRecord],
    ) -> Result<()> {
        let content = self.format_track(storm_id, name, records);
        std::fs::write(path, content).map_err(|e| TrackError::io(path, e))?;
        debug!("Wrote {} records to {}", records.len(), path.display());
        Ok(())
    }
}
