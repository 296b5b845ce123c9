//! Core data structures for best-track processing.
//!
//! Defines the HURDAT2 observation, the raw and aggregated B-deck records,
//! storm identity and the wind-radius containers shared by both formats.

use crate::constants::{PROFILE_HALF_WIDTH, PROFILE_LEN};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Wind-radius threshold class reported by B-deck rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThresholdClass {
    Kt34,
    Kt50,
    Kt64,
}

impl ThresholdClass {
    /// Recognise the threshold column; blank or `0` is no threshold
    pub fn from_field(field: &str) -> Option<Self> {
        match field.trim() {
            "34" => Some(ThresholdClass::Kt34),
            "50" => Some(ThresholdClass::Kt50),
            "64" => Some(ThresholdClass::Kt64),
            _ => None,
        }
    }
}

/// Quadrant radii (NE, SE, SW, NW) for each wind threshold, in nautical miles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindRadii {
    pub r34: [i32; 4],
    pub r50: [i32; 4],
    pub r64: [i32; 4],
}

impl WindRadii {
    pub fn get(&self, threshold: ThresholdClass) -> &[i32; 4] {
        match threshold {
            ThresholdClass::Kt34 => &self.r34,
            ThresholdClass::Kt50 => &self.r50,
            ThresholdClass::Kt64 => &self.r64,
        }
    }

    /// Replace the quadrant values of one threshold
    pub fn set(&mut self, threshold: ThresholdClass, quadrants: [i32; 4]) {
        match threshold {
            ThresholdClass::Kt34 => self.r34 = quadrants,
            ThresholdClass::Kt50 => self.r50 = quadrants,
            ThresholdClass::Kt64 => self.r64 = quadrants,
        }
    }

    /// All twelve values in HURDAT2 column order
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.r34
            .iter()
            .chain(self.r50.iter())
            .chain(self.r64.iter())
            .copied()
    }
}

/// Auxiliary per-observation profile indexed by offset -15..=+15
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuxProfile {
    values: Vec<Option<f64>>,
}

impl AuxProfile {
    /// Build from exactly [`PROFILE_LEN`] values, lowest offset first
    pub fn new(values: Vec<Option<f64>>) -> Option<Self> {
        (values.len() == PROFILE_LEN).then_some(Self { values })
    }

    pub fn get(&self, offset: i32) -> Option<f64> {
        if !(-PROFILE_HALF_WIDTH..=PROFILE_HALF_WIDTH).contains(&offset) {
            return None;
        }
        self.values[(offset + PROFILE_HALF_WIDTH) as usize]
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }
}

/// One HURDAT2 track observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp: NaiveDateTime,

    /// Record identifier such as `L` (landfall); absent when blank
    pub record_id: Option<String>,

    /// Status code (HU, TS, EX, ...)
    pub status: String,

    /// Signed degrees, north positive
    pub latitude: f64,

    /// Signed degrees, east positive
    pub longitude: f64,

    /// Knots; absent when reported as -999 or unparseable
    pub max_wind: Option<i32>,

    /// hPa; absent when reported as -999 or unparseable
    pub min_pressure: Option<i32>,

    /// Present when the line carries all twelve radius columns
    pub radii: Option<WindRadii>,

    pub max_wind_radius: Option<i32>,

    /// Only populated by the extended reader on 52-field lines
    pub profile: Option<AuxProfile>,
}

/// One B-deck CSV row: a (timestamp, threshold) combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTrackRow {
    pub basin: String,
    pub number: String,

    /// Raw `YYYYMMDDHH[MM]` field; its first ten characters are the key
    pub timestamp: String,

    /// Tenths-of-degree token such as `152S`
    pub latitude_raw: String,
    pub longitude_raw: String,

    pub max_wind: Option<i32>,
    pub min_pressure: Option<i32>,
    pub system_code: String,
    pub threshold: Option<ThresholdClass>,

    /// NE, SE, SW, NW radii for `threshold` (0 when unparseable)
    pub quadrant_radii: [i32; 4],

    pub name: String,
}

impl RawTrackRow {
    /// Year-month-day-hour aggregation key
    pub fn timestamp_key(&self) -> &str {
        self.timestamp
            .get(..crate::constants::TIMESTAMP_KEY_LEN)
            .unwrap_or(&self.timestamp)
    }
}

/// All rows of one synoptic time collapsed into a single record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRecord {
    pub latitude_raw: String,
    pub longitude_raw: String,
    pub max_wind: Option<i32>,
    pub min_pressure: Option<i32>,
    pub intensity_code: String,
    pub radii: WindRadii,
}

impl AggregatedRecord {
    /// Seed the non-radius fields from the first row seen for a timestamp
    pub fn seed(row: &RawTrackRow) -> Self {
        Self {
            latitude_raw: row.latitude_raw.clone(),
            longitude_raw: row.longitude_raw.clone(),
            max_wind: row.max_wind,
            min_pressure: row.min_pressure,
            intensity_code: row.system_code.clone(),
            radii: WindRadii::default(),
        }
    }
}

/// Insertion-ordered map of timestamp key to aggregated record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedTrack {
    records: Vec<(String, AggregatedRecord)>,
    index: HashMap<String, usize>,
}

impl AggregatedTrack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the record for `key`, creating it with `seed` on first sight
    pub fn entry_or_insert_with(
        &mut self,
        key: &str,
        seed: impl FnOnce() -> AggregatedRecord,
    ) -> &mut AggregatedRecord {
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => {
                self.records.push((key.to_string(), seed()));
                let position = self.records.len() - 1;
                self.index.insert(key.to_string(), position);
                position
            }
        };
        &mut self.records[position].1
    }

    pub fn get(&self, key: &str) -> Option<&AggregatedRecord> {
        self.index.get(key).map(|&position| &self.records[position].1)
    }

    /// Records in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AggregatedRecord)> {
        self.records
            .iter()
            .map(|(key, record)| (key.as_str(), record))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Basin/number/year identifier plus resolved display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StormIdentity {
    /// Two-letter upper-case basin code
    pub basin: String,
    /// Two-digit zero-padded storm number
    pub number: String,
    pub year: String,
    pub name: String,
}

impl StormIdentity {
    /// `WP191998`-style identifier used in headers and file names
    pub fn storm_id(&self) -> String {
        format!("{}{}{}", self.basin, self.number, self.year)
    }

    /// `<basin><num><year>_<name>_<count>.txt`
    pub fn output_file_name(&self, record_count: usize) -> String {
        format!(
            "{}_{}_{}.{}",
            self.storm_id(),
            self.name,
            record_count,
            crate::constants::HURDAT2_EXTENSION
        )
    }
}
