//! Ink color representation and hex parsing.

use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors produced while parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("Color must start with '#': {0}")]
    MissingHash(String),
    #[error("Unsupported color length {len} in {input}")]
    BadLength { input: String, len: usize },
    #[error("Invalid hex digit in color: {0}")]
    BadDigit(String),
}

/// RGBA8 color used for ink and surface styles.
///
/// Serialized as a `#rrggbb` (or `#rrggbbaa` when translucent) string so
/// configs and event scripts can use the same notation as color pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InkColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl InkColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Format as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for InkColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Color> for InkColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<InkColor> for Color {
    fn from(color: InkColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

impl TryFrom<String> for InkColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_hex_color(&value)
    }
}

impl From<InkColor> for String {
    fn from(color: InkColor) -> Self {
        color.to_hex()
    }
}

impl std::str::FromStr for InkColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_color(s)
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex_color(input: &str) -> Result<InkColor, ColorParseError> {
    let trimmed = input.trim();
    let hex = trimmed
        .strip_prefix('#')
        .ok_or_else(|| ColorParseError::MissingHash(input.to_string()))?;

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::BadDigit(input.to_string()));
    }

    let byte = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError::BadDigit(input.to_string()))
    };

    match hex.len() {
        3 => {
            // #rgb -> #rrggbb
            let r = byte(0..1)? * 17;
            let g = byte(1..2)? * 17;
            let b = byte(2..3)? * 17;
            Ok(InkColor::rgb(r, g, b))
        }
        6 => Ok(InkColor::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
        8 => Ok(InkColor::new(byte(0..2)?, byte(2..4)?, byte(4..6)?, byte(6..8)?)),
        len => Err(ColorParseError::BadLength {
            input: input.to_string(),
            len,
        }),
    }
}
