//! Color types and utilities

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RGBA color with f32 components (0.0 to 1.0)
///
/// Colors serialize as `#rrggbb` (or `#rrggbbaa` when not opaque) and parse
/// from either hex notation or comma separated 8-bit components such as
/// `210,210,210` or `0,0,0,128`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Errors produced while parsing a color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input was empty or whitespace
    #[error("empty color string")]
    Empty,

    /// Hex notation with a bad length or non-hex digits
    #[error("invalid hex color `{0}` (expected #rrggbb or #rrggbbaa)")]
    InvalidHex(String),

    /// A component that is not an integer in 0..=255
    #[error("invalid color component `{0}` (expected 0-255)")]
    InvalidComponent(String),

    /// Component list with neither 3 nor 4 entries
    #[error("expected 3 or 4 color components, found {0}")]
    ComponentCount(usize),
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Create an opaque color from u8 components (0-255)
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create from hex value (0xRRGGBB)
    pub fn from_hex(hex: u32) -> Self {
        let [_, r, g, b] = hex.to_be_bytes();
        Self::from_rgb8(r, g, b)
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Convert to u8 array [r, g, b, a], rounding to the nearest step
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    /// Hex notation, `#rrggbb` for opaque colors and `#rrggbbaa` otherwise
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == u8::MAX {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

fn channel_to_u8(value: f32) -> u8 {
    // Clamped first, so the cast cannot wrap
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn parse_hex(digits: &str, original: &str) -> Result<Color, ColorParseError> {
    if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHex(original.to_string()));
    }
    let byte = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| ColorParseError::InvalidHex(original.to_string()))
    };
    let alpha = if digits.len() == 8 { byte(6)? } else { u8::MAX };
    Ok(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, alpha))
}

fn parse_components(src: &str) -> Result<Color, ColorParseError> {
    let parts: Vec<&str> = src.split(',').map(str::trim).collect();
    if !matches!(parts.len(), 3 | 4) {
        return Err(ColorParseError::ComponentCount(parts.len()));
    }
    let mut channels = [u8::MAX; 4];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        *slot = part
            .parse::<u8>()
            .map_err(|_| ColorParseError::InvalidComponent((*part).to_string()))?;
    }
    let [r, g, b, a] = channels;
    Ok(Color::from_rgba8(r, g, b, a))
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let src = s.trim();
        if src.is_empty() {
            return Err(ColorParseError::Empty);
        }
        match src.strip_prefix('#') {
            Some(digits) => parse_hex(digits, src),
            None => parse_components(src),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba8_round_trips_exactly() {
        let gray = Color::from_rgb8(210, 210, 210);
        assert_eq!(gray.to_rgba8(), [210, 210, 210, 255]);
    }

    #[test]
    fn parses_hex_and_component_forms() {
        assert_eq!("#d2d2d2".parse::<Color>(), Ok(Color::from_rgb8(210, 210, 210)));
        assert_eq!("210, 210, 210".parse::<Color>(), Ok(Color::from_rgb8(210, 210, 210)));
        assert_eq!(
            "#33669980".parse::<Color>(),
            Ok(Color::from_rgba8(0x33, 0x66, 0x99, 0x80))
        );
        assert_eq!("0,0,0,0".parse::<Color>(), Ok(Color::from_rgba8(0, 0, 0, 0)));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!("".parse::<Color>(), Err(ColorParseError::Empty));
        assert!(matches!(
            "#12345".parse::<Color>(),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            "#gg0000".parse::<Color>(),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert_eq!("1,2".parse::<Color>(), Err(ColorParseError::ComponentCount(2)));
        assert!(matches!(
            "1,2,300".parse::<Color>(),
            Err(ColorParseError::InvalidComponent(_))
        ));
    }

    #[test]
    fn hex_string_omits_opaque_alpha() {
        assert_eq!(Color::from_hex(0x3399ff).to_hex_string(), "#3399ff");
        assert_eq!(
            Color::from_hex(0x3399ff).with_alpha(0.0).to_hex_string(),
            "#3399ff00"
        );
    }

    #[test]
    fn serde_uses_string_form() {
        let json = serde_json::to_string(&Color::from_rgb8(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");
        let back: Color = serde_json::from_str("\"1,2,3\"").unwrap();
        assert_eq!(back, Color::from_rgb8(1, 2, 3));
        assert!(serde_json::from_str::<Color>("\"#zz\"").is_err());
    }
}
