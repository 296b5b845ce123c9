//! Field parsing utilities for track records
//!
//! Each parser returns the value together with a classified outcome so the
//! caller decides whether a failure is logged, counted or ignored.

use crate::constants::{MISSING_SENTINEL, MISSING_SENTINEL_STR};
use chrono::{NaiveDate, NaiveDateTime};

/// How a raw field was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
    Parsed,
    /// The `-999` missing-value sentinel
    Sentinel,
    Blank,
    /// Non-empty text that is not a number
    Invalid,
}

/// A parsed field value and how it was obtained
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldValue<T> {
    pub value: Option<T>,
    pub outcome: FieldOutcome,
}

impl<T> FieldValue<T> {
    fn parsed(value: T) -> Self {
        Self {
            value: Some(value),
            outcome: FieldOutcome::Parsed,
        }
    }

    fn absent(outcome: FieldOutcome) -> Self {
        Self {
            value: None,
            outcome,
        }
    }

    /// Value, or `default` when absent for any reason
    pub fn or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    pub fn is_invalid(&self) -> bool {
        self.outcome == FieldOutcome::Invalid
    }
}

/// Parse wind or pressure; `-999` and unparseable text are both absent
pub fn parse_measurement(raw: &str) -> FieldValue<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldValue::absent(FieldOutcome::Blank);
    }
    if trimmed == MISSING_SENTINEL_STR {
        return FieldValue::absent(FieldOutcome::Sentinel);
    }
    match trimmed.parse::<i32>() {
        Ok(MISSING_SENTINEL) => FieldValue::absent(FieldOutcome::Sentinel),
        Ok(value) => FieldValue::parsed(value),
        Err(_) => FieldValue::absent(FieldOutcome::Invalid),
    }
}

/// Parse a plain integer without sentinel mapping (radii, counts)
pub fn parse_integer(raw: &str) -> FieldValue<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldValue::absent(FieldOutcome::Blank);
    }
    match trimmed.parse::<i32>() {
        Ok(value) => FieldValue::parsed(value),
        Err(_) => FieldValue::absent(FieldOutcome::Invalid),
    }
}

/// Parse a floating-point profile value; `-999` is absent
pub fn parse_profile_value(raw: &str) -> FieldValue<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldValue::absent(FieldOutcome::Blank);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value == MISSING_SENTINEL as f64 => {
            FieldValue::absent(FieldOutcome::Sentinel)
        }
        Ok(value) if value.is_finite() => FieldValue::parsed(value),
        _ => FieldValue::absent(FieldOutcome::Invalid),
    }
}

/// Parse HURDAT2 `YYYYMMDD` + `HHMM` into a timestamp.
///
/// A time that is not exactly four characters is read as `0000`.
pub fn parse_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = date.trim();
    let time = time.trim();
    let time = if time.len() == 4 { time } else { "0000" };

    if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !time.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year = date[..4].parse::<i32>().ok()?;
    let month = date[4..6].parse::<u32>().ok()?;
    let day = date[6..8].parse::<u32>().ok()?;
    let hour = time[..2].parse::<u32>().ok()?;
    let minute = time[2..].parse::<u32>().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_measurement_sentinel_is_absent() {
        let parsed = parse_measurement("-999");
        assert_eq!(parsed.value, None);
        assert_eq!(parsed.outcome, FieldOutcome::Sentinel);

        let padded = parse_measurement("  -999 ");
        assert_eq!(padded.value, None);
    }

    #[test]
    fn test_measurement_values() {
        assert_eq!(parse_measurement(" 45").value, Some(45));
        assert_eq!(parse_measurement("1006").value, Some(1006));
        assert_eq!(parse_measurement("").outcome, FieldOutcome::Blank);

        let invalid = parse_measurement("abc");
        assert_eq!(invalid.value, None);
        assert!(invalid.is_invalid());
    }

    #[test]
    fn test_integer_keeps_negative_values() {
        assert_eq!(parse_integer("-999").value, Some(-999));
        assert_eq!(parse_integer("x").or(0), 0);
        assert_eq!(parse_integer("  60").or(0), 60);
    }

    #[test]
    fn test_profile_value() {
        assert_eq!(parse_profile_value("12.5").value, Some(12.5));
        assert_eq!(parse_profile_value("-999").outcome, FieldOutcome::Sentinel);
        assert_eq!(parse_profile_value("-999.0").value, None);
        assert!(parse_profile_value("NaN").is_invalid());
    }

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp("20030915", "1200").unwrap();
        assert_eq!(ts.year(), 2003);
        assert_eq!(ts.month(), 9);
        assert_eq!(ts.day(), 15);
        assert_eq!(ts.hour(), 12);
    }

    #[test]
    fn test_parse_timestamp_defaults_bad_time_to_midnight() {
        let ts = parse_timestamp("20030915", "12").unwrap();
        assert_eq!(ts.hour(), 0);
        assert_eq!(ts.minute(), 0);
    }

    #[test]
    fn test_parse_timestamp_rejects_bad_dates() {
        assert_eq!(parse_timestamp("20031345", "0000"), None);
        assert_eq!(parse_timestamp("2003091", "0000"), None);
        assert_eq!(parse_timestamp("2003O915", "0000"), None);
        assert_eq!(parse_timestamp("20030915", "25AA"), None);
        assert_eq!(parse_timestamp("20030915", "2500"), None);
    }
}
