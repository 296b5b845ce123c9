//! Collapse multi-threshold B-deck rows into one record per synoptic time
//!
//! B-deck repeats a fix once per wind-radius threshold it reports. The
//! position, wind, pressure and intensity of a fix come from the first row
//! seen for its timestamp; each threshold's radii come from the last row
//! seen for that threshold.

use tracing::debug;

use crate::models::{AggregatedRecord, AggregatedTrack, RawTrackRow};

/// Stable sort on the raw timestamp string, which is chronological for
/// the `YYYYMMDDHH` layout
pub fn sort_chronologically(rows: &mut [RawTrackRow]) {
    rows.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
}

/// Aggregate rows (already in chronological order) by timestamp key
pub fn aggregate(rows: &[RawTrackRow]) -> AggregatedTrack {
    let mut track = AggregatedTrack::new();

    for row in rows {
        let record = track.entry_or_insert_with(row.timestamp_key(), || AggregatedRecord::seed(row));
        if let Some(threshold) = row.threshold {
            record.radii.set(threshold, row.quadrant_radii);
        }
    }

    debug!(
        "Aggregated {} rows into {} synoptic records",
        rows.len(),
        track.len()
    );
    track
}
