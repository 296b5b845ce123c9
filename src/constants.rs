//! Application constants for the best-track processor
//!
//! Sentinels, vocabularies and default layout widths shared by the
//! HURDAT2 reader/writer and the B-deck converter.

// =============================================================================
// Sentinels
// =============================================================================

/// Literal used by HURDAT2 for "value not reported"
pub const MISSING_SENTINEL: i32 = -999;

/// String form of [`MISSING_SENTINEL`] as it appears in the text files
pub const MISSING_SENTINEL_STR: &str = "-999";

/// Storm name written when no usable name is present in the source rows
pub const UNNAMED_STORM: &str = "UNNAMED";

/// Placeholder names that never count as a storm's display name
pub const BANNED_STORM_NAMES: &[&str] = &["INVEST", "NONAME", "THREE", "TRANSITIONED", ""];

/// Status written when a JTWC system code has no HURDAT2 counterpart
pub const UNKNOWN_SYSTEM_CODE: &str = "XX";

// =============================================================================
// HURDAT2 layout
// =============================================================================

/// Minimum number of comma-delimited fields in a HURDAT2 data line
pub const HURDAT2_MIN_FIELDS: usize = 8;

/// Number of fields that carry the three wind-radius quadrant groups
pub const HURDAT2_RADII_END: usize = 20;

/// Field count of a line that carries the auxiliary profile
pub const HURDAT2_EXTENDED_FIELDS: usize = 52;

/// Offset of the first auxiliary profile field
pub const HURDAT2_PROFILE_START: usize = 21;

/// Auxiliary profile covers offsets -15..=+15
pub const PROFILE_HALF_WIDTH: i32 = 15;
pub const PROFILE_LEN: usize = (2 * PROFILE_HALF_WIDTH + 1) as usize;

/// Width of the right-justified latitude field (`27.4N`)
pub const LATITUDE_FIELD_WIDTH: usize = 5;

/// Width of the right-justified longitude field (`152.3E`)
pub const LONGITUDE_FIELD_WIDTH: usize = 6;

/// Header widths used by the NHC archive: 19-wide name, 7-wide count
pub const WIDE_NAME_FIELD_WIDTH: usize = 19;
pub const WIDE_COUNT_FIELD_WIDTH: usize = 7;

/// Alternative header layout: 20-wide name, 5-wide count
pub const COMPACT_NAME_FIELD_WIDTH: usize = 20;
pub const COMPACT_COUNT_FIELD_WIDTH: usize = 5;

/// Default width of each wind-radius value
pub const DEFAULT_RADIUS_FIELD_WIDTH: usize = 4;

// =============================================================================
// B-deck layout
// =============================================================================

/// Column indices of a JTWC B-deck row
pub mod bdeck_columns {
    pub const BASIN: usize = 0;
    pub const NUMBER: usize = 1;
    pub const TIMESTAMP: usize = 2;
    pub const LATITUDE: usize = 6;
    pub const LONGITUDE: usize = 7;
    pub const MAX_WIND: usize = 8;
    pub const MIN_PRESSURE: usize = 9;
    pub const SYSTEM_CODE: usize = 10;
    pub const THRESHOLD: usize = 11;
    pub const RADII_START: usize = 13;
    pub const STORM_NAME: usize = 27;
}

/// Length of the `YYYYMMDDHH` aggregation key
pub const TIMESTAMP_KEY_LEN: usize = 10;

/// Minimum columns needed to reach the timestamp field
pub const BDECK_MIN_FIELDS: usize = 3;

// =============================================================================
// Files and directories
// =============================================================================

/// Default directory for converted HURDAT2 tracks
pub const DEFAULT_OUTPUT_DIR: &str = "single_TC";

/// Extension of HURDAT2 track files
pub const HURDAT2_EXTENSION: &str = "txt";

/// B-deck extensions in order of preference when a storm exists as both
pub const DEFAULT_PREFERRED_EXTENSIONS: &[&str] = &["dat", "txt"];

/// Wind thresholds (kt) below which a missing JTWC code derives to LO / TS
pub const TROPICAL_STORM_WIND_KT: i32 = 34;
pub const HURRICANE_WIND_KT: i32 = 64;

/// Longitude magnitude beyond which a sign change counts as a dateline crossing
pub const ANTIMERIDIAN_LON_THRESHOLD: f64 = 170.0;
