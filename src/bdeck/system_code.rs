//! JTWC system code to HURDAT2 status mapping

use crate::constants::{HURRICANE_WIND_KT, TROPICAL_STORM_WIND_KT, UNKNOWN_SYSTEM_CODE};

/// Map a JTWC intensity code onto the HURDAT2 vocabulary.
///
/// A blank code is derived from the maximum wind: below 34 kt is `LO`,
/// below 64 kt is `TS`, anything stronger is `HU`. Missing wind counts as
/// 0 kt. Codes without a HURDAT2 counterpart become `XX`.
pub fn map_system_code(code: &str, max_wind: Option<i32>) -> &'static str {
    let code = code.trim().to_uppercase();
    let code = if code.is_empty() {
        derive_from_wind(max_wind.unwrap_or(0)).to_string()
    } else {
        code
    };

    match code.as_str() {
        "DB" => "DB",
        "TD" => "TD",
        "TS" => "TS",
        "TY" | "ST" | "HU" => "HU",
        "EX" => "EX",
        "LO" => "LO",
        _ => UNKNOWN_SYSTEM_CODE,
    }
}

fn derive_from_wind(max_wind: i32) -> &'static str {
    if max_wind < TROPICAL_STORM_WIND_KT {
        "LO"
    } else if max_wind < HURRICANE_WIND_KT {
        "TS"
    } else {
        "HU"
    }
}
