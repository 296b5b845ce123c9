//! Storm identity and display name resolution
//!
//! The basin/number/year triple comes either from a `b<basin><nn><yyyy>`
//! file name or from the first data row, per [`IdentityStrategy`]. The
//! display name is the most recent non-placeholder name in the rows.

use regex::Regex;
use std::path::Path;
use tracing::debug;

use crate::config::{ConverterConfig, IdentityStrategy};
use crate::constants::UNNAMED_STORM;
use crate::error::{Result, TrackError};
use crate::models::{RawTrackRow, StormIdentity};

/// Case-insensitive `b` + 2-letter basin + 2-digit number + 4-digit year
const FILENAME_ID_PATTERN: &str = r"(?i)^b([a-z]{2})(\d{2})(\d{4})";

/// Resolves [`StormIdentity`] for one input file
#[derive(Debug, Clone)]
pub struct StormIdentityResolver {
    strategy: IdentityStrategy,
    banned_names: Vec<String>,
    filename_pattern: Regex,
}

impl StormIdentityResolver {
    pub fn new(config: &ConverterConfig) -> Result<Self> {
        let filename_pattern = Regex::new(FILENAME_ID_PATTERN).map_err(|e| {
            TrackError::configuration(format!("invalid storm id pattern: {}", e))
        })?;

        Ok(Self {
            strategy: config.identity_strategy,
            banned_names: config
                .banned_names
                .iter()
                .map(|name| name.trim().to_uppercase())
                .collect(),
            filename_pattern,
        })
    }

    /// Resolve identity from the file name or rows (rows in chronological order)
    pub fn resolve(&self, path: &Path, rows: &[RawTrackRow]) -> Result<StormIdentity> {
        let (basin, number, year) = match self.strategy {
            IdentityStrategy::Filename => self.id_from_filename(path)?,
            IdentityStrategy::Row => rows
                .first()
                .map(id_from_row)
                .ok_or_else(|| TrackError::InvalidStormId {
                    file: display_name(path),
                })?,
        };

        let name = self.resolve_name(rows);
        debug!("Resolved {}{}{} as {}", basin, number, year, name);

        Ok(StormIdentity {
            basin,
            number,
            year,
            name,
        })
    }

    /// Parse `(BASIN, number, year)` from a B-deck file name
    pub fn id_from_filename(&self, path: &Path) -> Result<(String, String, String)> {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();

        let captures =
            self.filename_pattern
                .captures(stem)
                .ok_or_else(|| TrackError::InvalidStormId {
                    file: display_name(path),
                })?;

        Ok((
            captures[1].to_uppercase(),
            captures[2].to_string(),
            captures[3].to_string(),
        ))
    }

    /// Latest name in the rows that is not a placeholder, else `UNNAMED`
    pub fn resolve_name(&self, rows: &[RawTrackRow]) -> String {
        rows.iter()
            .rev()
            .map(|row| row.name.trim().to_uppercase())
            .find(|name| !name.is_empty() && !self.banned_names.contains(name))
            .unwrap_or_else(|| UNNAMED_STORM.to_string())
    }
}

/// Basin, zero-padded number and year from the first three row fields
pub fn id_from_row(row: &RawTrackRow) -> (String, String, String) {
    let number = match row.number.trim().parse::<u32>() {
        Ok(n) => format!("{:02}", n),
        Err(_) => format!("{:0>2}", row.number.trim()),
    };
    let year = row.timestamp.get(..4).unwrap_or(&row.timestamp).to_string();

    (row.basin.trim().to_uppercase(), number, year)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
