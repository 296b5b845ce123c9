//! HURDAT2 storm header line parsing

use serde::{Deserialize, Serialize};

/// Storm header: `AL122003,              HENRI,     22,`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackHeader {
    pub storm_id: String,
    pub name: String,
    /// Record count as declared by the file, which may disagree with the data
    pub record_count: Option<usize>,
}

impl TrackHeader {
    /// Lenient parse; `None` when the line has fewer than two fields
    pub fn parse(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() < 2 || parts[0].is_empty() {
            return None;
        }

        Some(TrackHeader {
            storm_id: parts[0].to_string(),
            name: parts[1].to_string(),
            record_count: parts.get(2).and_then(|s| s.parse::<usize>().ok()),
        })
    }
}
