//! Hex color parsing for milestone display colors.

use regex::Regex;

/// "#RRGGBB", case-insensitive.
pub fn is_valid_hex(s: &str) -> bool {
    let re = Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap();
    re.is_match(s)
}

/// Split "#RRGGBB" into channels. Returns None for anything malformed.
pub fn hex_to_rgb(s: &str) -> Option<(u8, u8, u8)> {
    if !is_valid_hex(s) {
        return None;
    }
    let r = u8::from_str_radix(&s[1..3], 16).ok()?;
    let g = u8::from_str_radix(&s[3..5], 16).ok()?;
    let b = u8::from_str_radix(&s[5..7], 16).ok()?;
    Some((r, g, b))
}

/// "#RRGGBB" → 0xRRGGBB, for the XLSX writer.
pub fn hex_to_u32(s: &str) -> Option<u32> {
    let (r, g, b) = hex_to_rgb(s)?;
    Some((u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b))
}

/// "#RRGGBB" → normalized (0.0..=1.0) channels, for the PDF writer.
pub fn hex_to_rgb_f32(s: &str) -> Option<(f32, f32, f32)> {
    let (r, g, b) = hex_to_rgb(s)?;
    Some((
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    ))
}
