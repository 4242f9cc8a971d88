//! Ordinal encoding for discrete body-position labels.
//!
//! The backend reports positions as a closed set of display strings. Charts
//! need them on a numeric scale, so each known label maps to an ordinal in
//! `0..=4`. `"Unknown Position"` is a legitimate backend marker and encodes
//! to no value; anything outside the table is an upstream data-quality
//! problem and gets logged before degrading the same way.

/// Lower bound of the position axis. Charts always show the full scale.
pub const AXIS_MIN: u8 = 0;
/// Upper bound of the position axis.
pub const AXIS_MAX: u8 = 4;
/// Tick step of the position axis.
pub const AXIS_STEP: u8 = 1;

/// Map a position label onto the ordinal scale. Total over all strings.
pub fn encode(label: &str) -> Option<u8> {
    match label {
        "Lying on Back (Supine)" => Some(3),
        "Lying on Left Side" => Some(2),
        "Lying on Right Side" => Some(1),
        "Lying on Stomach (Prone)" => Some(0),
        "Sitting / Upright" => Some(4),
        "Unknown Position" => None,
        other => {
            log::warn!("unrecognized sleep position label: {other:?}");
            None
        }
    }
}

/// Short axis tag for an ordinal; empty for anything off the scale.
pub fn decode(ordinal: u8) -> &'static str {
    match ordinal {
        4 => "Up",
        3 => "S",
        2 => "L",
        1 => "R",
        0 => "P",
        _ => "",
    }
}
