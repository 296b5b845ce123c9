//! Read statistics and result structures for HURDAT2 parsing

use super::header::TrackHeader;
use crate::models::Observation;
use serde::{Deserialize, Serialize};

/// Why a data line produced no observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Fewer than eight fields; reported as a warning
    TooFewFields,
    /// Date or time not parseable; expected noise in archival files
    InvalidTimestamp,
    /// Latitude or longitude not decodable
    InvalidCoordinate,
}

/// Parsing result with observations and basic statistics
#[derive(Debug, Clone)]
pub struct ReadResult {
    pub header: Option<TrackHeader>,

    /// Sorted by timestamp ascending
    pub observations: Vec<Observation>,

    pub stats: ReadStats,
}

/// Line-level read statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadStats {
    /// Non-blank data lines after the header
    pub total_lines: usize,

    pub observations_parsed: usize,

    pub too_few_fields: usize,
    pub invalid_timestamps: usize,
    pub invalid_coordinates: usize,

    /// Numeric fields that were present but unparseable
    pub fields_coerced: usize,

    /// Content of lines skipped for structural reasons
    pub warnings: Vec<String>,
}

impl ReadStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::TooFewFields => self.too_few_fields += 1,
            SkipReason::InvalidTimestamp => self.invalid_timestamps += 1,
            SkipReason::InvalidCoordinate => self.invalid_coordinates += 1,
        }
    }

    pub fn lines_skipped(&self) -> usize {
        self.too_few_fields + self.invalid_timestamps + self.invalid_coordinates
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.observations_parsed as f64 / self.total_lines as f64) * 100.0
        }
    }
}
