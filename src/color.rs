use egui::Color32;

use crate::error::ColorError;

/// Color used for new and erased pixels
pub const BLANK_PIXEL_COLOR: Color32 = Color32::WHITE;

/// Initial paint color of the color picker
pub const DEFAULT_PICKER_COLOR: Color32 = Color32::BLACK;

/// Parse a `#RRGGBB` or `#RGB` hex string into an opaque color.
/// The leading `#` is optional.
pub fn parse_hex_color(hex: &str) -> Result<Color32, ColorError> {
    let invalid = || ColorError::InvalidHex(hex.to_string());
    let digits = hex.trim().trim_start_matches('#');

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

    match digits.len() {
        6 => Ok(Color32::from_rgb(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => {
            // Short form: each digit is doubled (#F0A == #FF00AA)
            let short = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
            Ok(Color32::from_rgb(short(0)?, short(1)?, short(2)?))
        }
        _ => Err(invalid()),
    }
}

/// Format a color as an uppercase `#RRGGBB` string, dropping alpha
pub fn to_hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}
