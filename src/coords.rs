//! Hemisphere-suffixed coordinate tokens.
//!
//! HURDAT2 writes positions in degrees (`27.4N`, `87.7W`) while B-deck
//! writes them as integer tenths of a degree (`274N`, `877W`). Both share
//! the suffix convention: `S` and `W` are negative.

use serde::{Deserialize, Serialize};

/// Fixed-point convention of the numeric part of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordMode {
    /// Magnitude is already in degrees (HURDAT2)
    Degrees,
    /// Magnitude is an integer count of tenths of a degree (B-deck)
    Tenths,
}

/// Which hemisphere letters apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// (positive, negative) hemisphere letters
    pub fn hemispheres(self) -> (char, char) {
        match self {
            Axis::Latitude => ('N', 'S'),
            Axis::Longitude => ('E', 'W'),
        }
    }

    fn max_magnitude(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }

    fn from_hemisphere(letter: char) -> Option<Self> {
        match letter {
            'N' | 'S' => Some(Axis::Latitude),
            'E' | 'W' => Some(Axis::Longitude),
            _ => None,
        }
    }
}

/// Decode a token such as `27.4N` or `152S` into signed degrees.
///
/// Returns `None` for blank or malformed tokens and for magnitudes outside
/// the range of the axis the hemisphere letter implies.
pub fn decode(token: &str, mode: CoordMode) -> Option<f64> {
    let token = token.trim();
    let hemisphere = token.chars().last()?.to_ascii_uppercase();
    let axis = Axis::from_hemisphere(hemisphere)?;
    let number = &token[..token.len() - 1];

    if !is_unsigned_decimal(number) {
        return None;
    }

    let magnitude = match mode {
        CoordMode::Degrees => number.parse::<f64>().ok()?,
        CoordMode::Tenths => {
            if number.contains('.') {
                return None;
            }
            number.parse::<u32>().ok()? as f64 / 10.0
        }
    };

    if magnitude > axis.max_magnitude() {
        return None;
    }

    let (_, negative) = axis.hemispheres();
    Some(if hemisphere == negative {
        -magnitude
    } else {
        magnitude
    })
}

/// Encode signed degrees back into a hemisphere token, right-justified to `width`.
///
/// `precision` is the number of decimals of the magnitude in the units of
/// `mode` (degrees, or tenths of a degree).
pub fn encode(value: f64, axis: Axis, mode: CoordMode, precision: usize, width: usize) -> String {
    let (positive, negative) = axis.hemispheres();
    let hemisphere = if value < 0.0 { negative } else { positive };
    let magnitude = match mode {
        CoordMode::Degrees => value.abs(),
        CoordMode::Tenths => value.abs() * 10.0,
    };
    let token = format!("{:.*}{}", precision, magnitude, hemisphere);
    format!("{:>width$}", token, width = width)
}

/// Encode an optional position, leaving a blank field when absent
pub fn encode_field(value: Option<f64>, axis: Axis, width: usize) -> String {
    match value {
        Some(v) => encode(v, axis, CoordMode::Degrees, 1, width),
        None => format!("{:>width$}", "", width = width),
    }
}

fn is_unsigned_decimal(s: &str) -> bool {
    let mut parts = s.splitn(2, '.');
    let whole = parts.next().unwrap_or("");
    let fraction = parts.next();
    let digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    match fraction {
        Some(f) => digits(whole) && digits(f),
        None => digits(whole),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-9)
    }

    #[test]
    fn test_decode_degrees() {
        assert!(approx(decode("27.4N", CoordMode::Degrees), 27.4));
        assert!(approx(decode("87.7W", CoordMode::Degrees), -87.7));
        assert!(approx(decode(" 15.0S ", CoordMode::Degrees), -15.0));
        assert!(approx(decode("152.3E", CoordMode::Degrees), 152.3));
    }

    #[test]
    fn test_decode_tenths() {
        assert!(approx(decode("152S", CoordMode::Tenths), -15.2));
        assert!(approx(decode("1398E", CoordMode::Tenths), 139.8));
        assert!(approx(decode("1795w", CoordMode::Tenths), -179.5));
        assert_eq!(decode("15.2S", CoordMode::Tenths), None);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(decode("", CoordMode::Degrees), None);
        assert_eq!(decode("", CoordMode::Tenths), None);
        assert_eq!(decode("N", CoordMode::Degrees), None);
        assert_eq!(decode("27.4", CoordMode::Degrees), None);
        assert_eq!(decode("27.4X", CoordMode::Degrees), None);
        assert_eq!(decode("-27.4N", CoordMode::Degrees), None);
        assert_eq!(decode("1.2.3N", CoordMode::Degrees), None);
    }

    #[test]
    fn test_decode_range_by_axis() {
        assert_eq!(decode("91.0N", CoordMode::Degrees), None);
        assert!(approx(decode("179.9E", CoordMode::Degrees), 179.9));
        assert_eq!(decode("1850E", CoordMode::Tenths), None);
    }

    #[test]
    fn test_encode_degrees() {
        assert_eq!(encode(27.4, Axis::Latitude, CoordMode::Degrees, 1, 5), "27.4N");
        assert_eq!(encode(-8.5, Axis::Latitude, CoordMode::Degrees, 1, 5), " 8.5S");
        assert_eq!(encode(-87.7, Axis::Longitude, CoordMode::Degrees, 1, 6), " 87.7W");
        assert_eq!(encode(152.3, Axis::Longitude, CoordMode::Degrees, 1, 6), "152.3E");
    }

    #[test]
    fn test_encode_tenths() {
        assert_eq!(encode(-15.2, Axis::Latitude, CoordMode::Tenths, 0, 4), "152S");
        assert_eq!(encode(139.8, Axis::Longitude, CoordMode::Tenths, 0, 6), " 1398E");
    }

    #[test]
    fn test_encode_field_blank_when_absent() {
        assert_eq!(encode_field(None, Axis::Latitude, 5), "     ");
        assert_eq!(encode_field(Some(-0.5), Axis::Longitude, 6), "  0.5W");
    }
}
